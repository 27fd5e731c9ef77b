use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::AuthToken};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<AuthToken>>;
    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>>;
    /// Insert-if-absent keyed on the unique `user_id` index; when another
    /// request already holds a row for this user, that row wins and is
    /// returned. A key collision with a different user surfaces as
    /// `AlreadyExists` for the caller to retry.
    async fn claim_for_user(&self, token: AuthToken) -> AppResult<AuthToken>;
    /// Compare-and-set replacing an empty stored key. `None` when no
    /// empty-key row exists (either absent or already rotated).
    async fn rotate_empty_key(&self, user_id: &str, key: &str) -> AppResult<Option<AuthToken>>;
    /// Idempotent: deleting for a user with no token is a no-op.
    async fn delete_for_user(&self, user_id: &str) -> AppResult<u64>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTokenRepository {
    collection: Collection<AuthToken>,
}

impl MongoTokenRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("tokens");
        Self { collection }
    }
}

#[async_trait]
impl TokenRepository for MongoTokenRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<AuthToken>> {
        let token = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        Ok(token)
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>> {
        let token = self.collection.find_one(doc! { "key": key }).await?;
        Ok(token)
    }

    async fn claim_for_user(&self, token: AuthToken) -> AppResult<AuthToken> {
        let claimed = self
            .collection
            .find_one_and_update(
                doc! { "user_id": &token.user_id },
                doc! { "$setOnInsert": {
                    "key": &token.key,
                    "created_at": to_bson(&token.created_at)?,
                } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(claimed.unwrap_or(token))
    }

    async fn rotate_empty_key(&self, user_id: &str, key: &str) -> AppResult<Option<AuthToken>> {
        let rotated = self
            .collection
            .find_one_and_update(
                doc! { "user_id": user_id, "key": "" },
                doc! { "$set": { "key": key } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(rotated)
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

        let key_model = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(key_model).await?;
        log::info!("Created unique indexes on tokens.user_id and tokens.key");

        Ok(())
    }
}
