use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One game result. Append-only; `user_id` is `None` for guest play and is
/// nulled out (not cascaded) when the owning account is deleted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Score {
    pub id: String,
    pub user_id: Option<String>,
    pub player_name: String,
    pub score: i64,
    pub wrong: i64,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl Score {
    pub fn new(
        player_name: String,
        score: i64,
        wrong: i64,
        difficulty: String,
        user_id: Option<String>,
    ) -> Self {
        Score {
            id: Uuid::new_v4().to_string(),
            user_id,
            player_name,
            score,
            wrong,
            difficulty,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_creation() {
        let score = Score::new("bob".to_string(), 7, 2, "hard".to_string(), None);

        assert_eq!(score.player_name, "bob");
        assert_eq!(score.score, 7);
        assert_eq!(score.wrong, 2);
        assert_eq!(score.difficulty, "hard");
        assert!(score.user_id.is_none());
        assert!(!score.id.is_empty());
    }

    #[test]
    fn test_guest_score_serializes_null_user() {
        let score = Score::new("Guest".to_string(), 0, 0, "easy".to_string(), None);
        let json = serde_json::to_value(&score).expect("score should serialize");

        assert!(json.get("user_id").expect("user_id present").is_null());
    }
}
