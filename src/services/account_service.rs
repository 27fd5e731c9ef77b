use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::{AuthToken, Profile, User},
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
    services::{ProfileService, ScoreService, TokenService},
};

/// Registration, session, and account-lifetime flows. Each user moves
/// Anonymous → Registered → Authenticated (live token) → Anonymous again on
/// logout.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    profiles: Arc<ProfileService>,
    scores: Arc<ScoreService>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        profiles: Arc<ProfileService>,
        scores: Arc<ScoreService>,
    ) -> Self {
        Self {
            users,
            tokens,
            profiles,
            scores,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<(User, AuthToken)> {
        request.validate()?;

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "username '{}' is already taken",
                request.username
            )));
        }

        let password_hash = password::hash(request.password).await?;
        // the unique username index catches a concurrent duplicate the
        // check above missed
        let user = self
            .users
            .create(User::new(&request.username, &request.email, &password_hash))
            .await?;

        self.profiles.get_or_create(&user.id).await?;
        let token = self.tokens.issue_or_reuse(&user.id).await?;

        log::info!("registered user {}", user.username);

        Ok((user, token))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<(User, AuthToken, Profile)> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let verified = password::verify(request.password, user.password_hash.clone()).await?;
        if !verified {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue_or_reuse(&user.id).await?;
        let profile = self.profiles.get_or_create(&user.id).await?;

        Ok((user, token, profile))
    }

    pub async fn logout(&self, user: &User) -> AppResult<()> {
        self.tokens.revoke(&user.id).await
    }

    pub async fn current_profile(&self, user: &User) -> AppResult<Profile> {
        self.profiles.get_or_create(&user.id).await
    }

    /// Removes the account and everything it exclusively owns. Score rows
    /// outlive the user with their link nulled, so the leaderboard keeps its
    /// history.
    pub async fn delete_account(&self, user: &User) -> AppResult<()> {
        self.tokens.revoke(&user.id).await?;
        self.profiles.delete_for_user(&user.id).await?;
        let detached = self.scores.detach_user(&user.id).await?;
        self.users.delete(&user.id).await?;

        log::info!(
            "deleted account {} ({} score(s) detached)",
            user.username,
            detached
        );

        Ok(())
    }
}
