use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Profile,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch-or-create as one storage-level upsert; callers never see a
    /// check-then-act window.
    async fn get_or_create(&self, user_id: &str) -> AppResult<Profile>;
    /// Applies one game's deltas atomically and returns the post-image.
    /// Concurrent calls for the same user must all be reflected.
    async fn record_game(&self, user_id: &str, score: i64, wrong: i64) -> AppResult<Profile>;
    async fn delete_for_user(&self, user_id: &str) -> AppResult<u64>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("profiles");
        Self { collection }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn get_or_create(&self, user_id: &str) -> AppResult<Profile> {
        // user_id lands on the inserted document from the filter.
        let profile = self
            .collection
            .find_one_and_update(
                doc! { "user_id": user_id },
                doc! { "$setOnInsert": {
                    "total_games": 0_i64,
                    "total_correct": 0_i64,
                    "total_wrong": 0_i64,
                    "best_score": 0_i64,
                } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        profile.ok_or_else(|| {
            AppError::InternalError("profile upsert returned no document".to_string())
        })
    }

    async fn record_game(&self, user_id: &str, score: i64, wrong: i64) -> AppResult<Profile> {
        // $inc/$max keep the update atomic on the server; a first submission
        // upserts the row with the deltas as its initial counters.
        let profile = self
            .collection
            .find_one_and_update(
                doc! { "user_id": user_id },
                doc! {
                    "$inc": {
                        "total_games": 1_i64,
                        "total_correct": score,
                        "total_wrong": wrong,
                    },
                    "$max": { "best_score": score },
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        profile.ok_or_else(|| {
            AppError::InternalError("profile upsert returned no document".to_string())
        })
    }

    async fn delete_for_user(&self, user_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "user_id": user_id })
            .await?;

        Ok(result.deleted_count)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let user_model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(user_model).await?;
        log::info!("Created unique index on profiles.user_id");

        Ok(())
    }
}
