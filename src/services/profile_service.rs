use std::sync::Arc;

use crate::{errors::AppResult, models::domain::Profile, repositories::ProfileRepository};

/// Per-user cumulative statistics. All mutation goes through the
/// repository's atomic upserts; this layer never reads counters back before
/// writing.
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn record_game(&self, user_id: &str, score: i64, wrong: i64) -> AppResult<Profile> {
        self.profiles
            .record_game(user_id, score.max(0), wrong.max(0))
            .await
    }

    pub async fn get_or_create(&self, user_id: &str) -> AppResult<Profile> {
        self.profiles.get_or_create(user_id).await
    }

    pub async fn delete_for_user(&self, user_id: &str) -> AppResult<u64> {
        self.profiles.delete_for_user(user_id).await
    }
}
