use std::sync::Arc;

use crate::{
    auth::token::{generate_key, parse_auth_header},
    errors::{AppError, AppResult},
    models::domain::{AuthToken, User},
    repositories::{TokenRepository, UserRepository},
};

/// How many fresh keys to try before giving up on a (vanishingly unlikely)
/// run of unique-index collisions.
const MAX_KEY_ATTEMPTS: usize = 4;

/// Lifecycle of the opaque bearer credential: at most one live key per user,
/// reused across logins and destroyed on logout.
pub struct TokenService {
    tokens: Arc<dyn TokenRepository>,
    users: Arc<dyn UserRepository>,
}

impl TokenService {
    pub fn new(tokens: Arc<dyn TokenRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { tokens, users }
    }

    /// Returns the user's existing credential unchanged, or mints one. A
    /// stored-but-empty key is treated as corrupt and rotated in place, so
    /// the call is idempotent with respect to token identity.
    pub async fn issue_or_reuse(&self, user_id: &str) -> AppResult<AuthToken> {
        if let Some(existing) = self.tokens.find_by_user(user_id).await? {
            if !existing.key.is_empty() {
                return Ok(existing);
            }
            if let Some(rotated) = self
                .tokens
                .rotate_empty_key(user_id, &generate_key())
                .await?
            {
                return Ok(rotated);
            }
            // another request rotated or revoked it first; fall through
        }

        for _ in 0..MAX_KEY_ATTEMPTS {
            let candidate = AuthToken::new(user_id.to_string(), generate_key());
            match self.tokens.claim_for_user(candidate).await {
                Ok(token) if token.key.is_empty() => {
                    if let Some(rotated) = self
                        .tokens
                        .rotate_empty_key(user_id, &generate_key())
                        .await?
                    {
                        return Ok(rotated);
                    }
                }
                Ok(token) => return Ok(token),
                // key collided with another user's; retry with a fresh one
                Err(AppError::AlreadyExists(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        Err(AppError::InternalError(
            "could not allocate a unique token key".to_string(),
        ))
    }

    /// Resolves an `Authorization` header value to its user. `None` for a
    /// malformed header or unknown key; both lookups are point reads.
    pub async fn resolve(&self, header: &str) -> AppResult<Option<User>> {
        let Some(key) = parse_auth_header(header) else {
            return Ok(None);
        };

        let Some(token) = self.tokens.find_by_key(key).await? else {
            return Ok(None);
        };

        self.users.find_by_id(&token.user_id).await
    }

    /// Deletes the user's credential. Revoking a user with no token is a
    /// no-op.
    pub async fn revoke(&self, user_id: &str) -> AppResult<()> {
        let deleted = self.tokens.delete_for_user(user_id).await?;
        if deleted > 0 {
            log::debug!("revoked {} token(s) for user {}", deleted, user_id);
        }
        Ok(())
    }
}
