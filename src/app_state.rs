use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoProfileRepository, MongoQuestionRepository, MongoScoreRepository,
        MongoTokenRepository, MongoUserRepository, ProfileRepository, QuestionRepository,
        ScoreRepository, TokenRepository, UserRepository,
    },
    services::{AccountService, ProfileService, QuestionService, ScoreService, TokenService},
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub token_service: Arc<TokenService>,
    pub profile_service: Arc<ProfileService>,
    pub score_service: Arc<ScoreService>,
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
    /// Absent when the state is wired over non-Mongo repositories (tests).
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let score_repository = Arc::new(MongoScoreRepository::new(&db));
        score_repository.ensure_indexes().await?;

        let profile_repository = Arc::new(MongoProfileRepository::new(&db));
        profile_repository.ensure_indexes().await?;

        let token_repository = Arc::new(MongoTokenRepository::new(&db));
        token_repository.ensure_indexes().await?;

        Ok(Self::from_parts(
            user_repository,
            question_repository,
            score_repository,
            profile_repository,
            token_repository,
            config,
            Some(db),
        ))
    }

    /// Wires the service graph over any repository set; integration tests
    /// inject in-memory repositories here.
    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        questions: Arc<dyn QuestionRepository>,
        scores: Arc<dyn ScoreRepository>,
        profiles: Arc<dyn ProfileRepository>,
        tokens: Arc<dyn TokenRepository>,
        config: Config,
        db: Option<Database>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(tokens, users.clone()));
        let profile_service = Arc::new(ProfileService::new(profiles));
        let score_service = Arc::new(ScoreService::new(scores, profile_service.clone()));
        let question_service = Arc::new(QuestionService::new(questions));
        let account_service = Arc::new(AccountService::new(
            users,
            token_service.clone(),
            profile_service.clone(),
            score_service.clone(),
        ));

        Self {
            account_service,
            token_service,
            profile_service,
            score_service,
            question_service,
            config: Arc::new(config),
            db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
