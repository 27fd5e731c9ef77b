use std::sync::Arc;

use crate::{errors::AppResult, models::domain::Question, repositories::QuestionRepository};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Active questions in ascending-id order; deactivated ones never leave
    /// the store but are invisible here.
    pub async fn list_active(&self) -> AppResult<Vec<Question>> {
        self.questions.list_active().await
    }
}
