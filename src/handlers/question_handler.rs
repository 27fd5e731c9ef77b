use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::response::QuestionListResponse,
};

pub async fn list_questions(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let questions = state.question_service.list_active().await?;
    Ok(HttpResponse::Ok().json(QuestionListResponse::from(questions)))
}
