#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quizarena_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AuthToken, Profile, Question, Score, User},
    repositories::{
        ProfileRepository, QuestionRepository, ScoreRepository, TokenRepository, UserRepository,
    },
};

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::AlreadyExists(format!(
                "username '{}' is already taken",
                user.username
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.remove(id).is_none() {
            return Err(AppError::NotFound(format!("User with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<i64, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::AlreadyExists(format!(
                "Question with id '{}' already exists",
                question.id
            )));
        }
        questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn list_active(&self) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut active: Vec<Question> = questions
            .values()
            .filter(|q| q.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|q| q.id);
        Ok(active)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryScoreRepository {
    scores: Arc<RwLock<Vec<Score>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            scores: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Score> {
        let scores = self.scores.read().await;
        scores.iter().find(|s| s.id == id).cloned()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn create(&self, score: Score) -> AppResult<Score> {
        let mut scores = self.scores.write().await;
        scores.push(score.clone());
        Ok(score)
    }

    async fn list_top(&self, limit: i64) -> AppResult<Vec<Score>> {
        let scores = self.scores.read().await;
        let mut sorted: Vec<Score> = scores.clone();
        sorted.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        sorted.truncate(limit.max(0) as usize);
        Ok(sorted)
    }

    async fn detach_user(&self, user_id: &str) -> AppResult<u64> {
        let mut scores = self.scores.write().await;
        let mut detached = 0;
        for score in scores.iter_mut() {
            if score.user_id.as_deref() == Some(user_id) {
                score.user_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_or_create(&self, user_id: &str) -> AppResult<Profile> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles
            .entry(user_id.to_string())
            .or_insert_with(|| Profile::empty(user_id))
            .clone())
    }

    async fn record_game(&self, user_id: &str, score: i64, wrong: i64) -> AppResult<Profile> {
        // single write lock per call, mirroring the server-side atomic update
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(user_id.to_string())
            .or_insert_with(|| Profile::empty(user_id));
        profile.total_games += 1;
        profile.total_correct += score;
        profile.total_wrong += wrong;
        profile.best_score = profile.best_score.max(score);
        Ok(profile.clone())
    }

    async fn delete_for_user(&self, user_id: &str) -> AppResult<u64> {
        let mut profiles = self.profiles.write().await;
        Ok(u64::from(profiles.remove(user_id).is_some()))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryTokenRepository {
    tokens: Arc<RwLock<HashMap<String, AuthToken>>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<AuthToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(user_id).cloned())
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<AuthToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.key == key).cloned())
    }

    async fn claim_for_user(&self, token: AuthToken) -> AppResult<AuthToken> {
        let mut tokens = self.tokens.write().await;
        if let Some(existing) = tokens.get(&token.user_id) {
            return Ok(existing.clone());
        }
        if tokens.values().any(|t| t.key == token.key) {
            return Err(AppError::AlreadyExists(format!(
                "token key '{}' already exists",
                token.key
            )));
        }
        tokens.insert(token.user_id.clone(), token.clone());
        Ok(token)
    }

    async fn rotate_empty_key(&self, user_id: &str, key: &str) -> AppResult<Option<AuthToken>> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(user_id) {
            Some(token) if token.key.is_empty() => {
                token.key = key.to_string();
                Ok(Some(token.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_for_user(&self, user_id: &str) -> AppResult<u64> {
        let mut tokens = self.tokens.write().await;
        Ok(u64::from(tokens.remove(user_id).is_some()))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Handles to every in-memory store, kept so tests can inspect state behind
/// the API.
pub struct TestRepos {
    pub users: Arc<InMemoryUserRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub scores: Arc<InMemoryScoreRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
}

pub fn test_repos() -> TestRepos {
    TestRepos {
        users: Arc::new(InMemoryUserRepository::new()),
        questions: Arc::new(InMemoryQuestionRepository::new()),
        scores: Arc::new(InMemoryScoreRepository::new()),
        profiles: Arc::new(InMemoryProfileRepository::new()),
        tokens: Arc::new(InMemoryTokenRepository::new()),
    }
}

pub fn test_state(repos: &TestRepos) -> Arc<AppState> {
    Arc::new(AppState::from_parts(
        repos.users.clone(),
        repos.questions.clone(),
        repos.scores.clone(),
        repos.profiles.clone(),
        repos.tokens.clone(),
        Config::test_config(),
        None,
    ))
}
