use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Score};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn create(&self, score: Score) -> AppResult<Score>;
    async fn list_top(&self, limit: i64) -> AppResult<Vec<Score>>;
    /// Nulls out `user_id` on the user's scores so the records survive
    /// account deletion as guest entries. Returns the number detached.
    async fn detach_user(&self, user_id: &str) -> AppResult<u64>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoScoreRepository {
    collection: Collection<Score>,
}

impl MongoScoreRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("scores");
        Self { collection }
    }
}

#[async_trait]
impl ScoreRepository for MongoScoreRepository {
    async fn create(&self, score: Score) -> AppResult<Score> {
        self.collection.insert_one(&score).await?;
        Ok(score)
    }

    async fn list_top(&self, limit: i64) -> AppResult<Vec<Score>> {
        let scores = self
            .collection
            .find(doc! {})
            .sort(doc! { "score": -1, "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(scores)
    }

    async fn detach_user(&self, user_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "user_id": user_id },
                doc! { "$set": { "user_id": Bson::Null } },
            )
            .await?;

        Ok(result.modified_count)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_model = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(id_model).await?;

        let leaderboard_model = IndexModel::builder()
            .keys(doc! { "score": -1, "created_at": -1 })
            .build();
        self.collection.create_index(leaderboard_model).await?;

        let user_model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        self.collection.create_index(user_model).await?;
        log::info!("Created indexes for scores collection");

        Ok(())
    }
}
