use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{Score, User},
        dto::request::SubmitScoreRequest,
    },
    repositories::ScoreRepository,
    services::ProfileService,
};

pub const TOP_SCORES_LIMIT: i64 = 10;

const DEFAULT_PLAYER_NAME: &str = "Guest";
const DEFAULT_DIFFICULTY: &str = "easy";

pub struct ScoreService {
    scores: Arc<dyn ScoreRepository>,
    profiles: Arc<ProfileService>,
}

impl ScoreService {
    pub fn new(scores: Arc<dyn ScoreRepository>, profiles: Arc<ProfileService>) -> Self {
        Self { scores, profiles }
    }

    /// Persists one game result and, for an authenticated caller, folds it
    /// into their profile. Guest submissions only append the record.
    pub async fn submit(
        &self,
        request: SubmitScoreRequest,
        user: Option<&User>,
    ) -> AppResult<Score> {
        let player_name = non_empty_or(request.player_name, DEFAULT_PLAYER_NAME);
        let difficulty = non_empty_or(request.difficulty, DEFAULT_DIFFICULTY);

        let score = Score::new(
            player_name,
            request.score.max(0),
            request.wrong.max(0),
            difficulty,
            user.map(|u| u.id.clone()),
        );

        let created = self.scores.create(score).await?;

        if let Some(user) = user {
            self.profiles
                .record_game(&user.id, created.score, created.wrong)
                .await?;
        }

        log::info!(
            "score {} recorded for {} ({})",
            created.score,
            created.player_name,
            created.difficulty
        );

        Ok(created)
    }

    /// Leaderboard: highest score first, most recent first among ties.
    pub async fn list_top(&self) -> AppResult<Vec<Score>> {
        self.scores.list_top(TOP_SCORES_LIMIT).await
    }

    pub async fn detach_user(&self, user_id: &str) -> AppResult<u64> {
        self.scores.detach_user(user_id).await
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
