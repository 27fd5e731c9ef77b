use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque bearer credential, one live row per user. The key is stored
/// verbatim so that repeated registration/login calls can hand back the same
/// credential.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthToken {
    pub user_id: String,
    pub key: String,
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(user_id: String, key: String) -> Self {
        Self {
            user_id,
            key,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_creation() {
        let token = AuthToken::new("user-1".to_string(), "abc123".to_string());

        assert_eq!(token.user_id, "user-1");
        assert_eq!(token.key, "abc123");
    }
}
