use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Profile, Question, Score, User};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

/// Login payload carries the identity plus headline stats, so returning
/// clients can render a dashboard without a second round trip.
#[derive(Debug, Serialize)]
pub struct LoginUserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub total_games: i64,
    pub best_score: i64,
    pub average_score: f64,
    pub accuracy: f64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoginUserDto,
}

impl LoginResponse {
    pub fn new(message: &str, token: String, user: User, profile: &Profile) -> Self {
        LoginResponse {
            message: message.to_string(),
            token,
            user: LoginUserDto {
                id: user.id,
                username: user.username,
                email: user.email,
                total_games: profile.total_games,
                best_score: profile.best_score,
                average_score: profile.average_score(),
                accuracy: profile.accuracy(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub total_games: i64,
    pub best_score: i64,
    pub average_score: f64,
    pub accuracy: f64,
    pub total_correct: i64,
    pub total_wrong: i64,
}

impl ProfileResponse {
    pub fn new(user: &User, profile: &Profile) -> Self {
        ProfileResponse {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            total_games: profile.total_games,
            best_score: profile.best_score,
            average_score: profile.average_score(),
            accuracy: profile.accuracy(),
            total_correct: profile.total_correct,
            total_wrong: profile.total_wrong,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreDto {
    pub id: String,
    pub player_name: String,
    pub score: i64,
    pub wrong: i64,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl From<Score> for ScoreDto {
    fn from(score: Score) -> Self {
        ScoreDto {
            id: score.id,
            player_name: score.player_name,
            score: score.score,
            wrong: score.wrong,
            difficulty: score.difficulty,
            created_at: score.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitScoreResponse {
    pub message: String,
    pub id: String,
}

/// Public question view. `answer` carries the correct option's text, which
/// the quiz client uses to grade locally.
#[derive(Debug, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            id: question.id,
            question: question.question_text.clone(),
            options: question.options().iter().map(|o| o.to_string()).collect(),
            answer: question.correct_answer_text().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionDto>,
}

impl From<Vec<Question>> for QuestionListResponse {
    fn from(questions: Vec<Question>) -> Self {
        QuestionListResponse {
            questions: questions.iter().map(QuestionDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_dto_exposes_answer_text() {
        let question = Question::test_question(3, true);
        let dto = QuestionDto::from(&question);

        assert_eq!(dto.id, 3);
        assert_eq!(dto.options.len(), 4);
        assert_eq!(dto.answer, "Bravo");
    }

    #[test]
    fn test_profile_response_includes_derived_stats() {
        let user = User::test_user("alice");
        let profile = Profile {
            user_id: user.id.clone(),
            total_games: 2,
            total_correct: 15,
            total_wrong: 5,
            best_score: 9,
        };

        let response = ProfileResponse::new(&user, &profile);

        assert_eq!(response.username, "alice");
        assert_eq!(response.average_score, 7.5);
        assert_eq!(response.accuracy, 75.0);
        assert_eq!(response.total_correct, 15);
    }
}
