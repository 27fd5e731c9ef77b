#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Question, Score, User};

    pub fn test_user() -> User {
        User::test_user("testuser")
    }

    pub fn test_user_with_username(username: &str) -> User {
        User::test_user(username)
    }

    /// A small active/inactive question mix for listing tests.
    pub fn test_questions() -> Vec<Question> {
        vec![
            Question::test_question(1, true),
            Question::test_question(2, false),
            Question::test_question(3, true),
        ]
    }

    pub fn guest_score(score: i64) -> Score {
        Score::new("Guest".to_string(), score, 0, "easy".to_string(), None)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}
