use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::MaybeUser,
    errors::AppError,
    models::dto::{
        request::{parse_lenient, SubmitScoreRequest},
        response::{ScoreDto, SubmitScoreResponse},
    },
};

pub async fn list_scores(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let scores = state.score_service.list_top().await?;
    let scores: Vec<ScoreDto> = scores.into_iter().map(ScoreDto::from).collect();
    Ok(HttpResponse::Ok().json(scores))
}

/// Accepts both guest and authenticated submissions; the raw body is parsed
/// leniently so a malformed payload records a zeroed guest game rather than
/// erroring.
pub async fn submit_score(
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
    caller: MaybeUser,
) -> Result<HttpResponse, AppError> {
    let request: SubmitScoreRequest = parse_lenient(&body);

    let score = state
        .score_service
        .submit(request, caller.0.as_ref())
        .await?;

    Ok(HttpResponse::Created().json(SubmitScoreResponse {
        message: "Score submitted".to_string(),
        id: score.id,
    }))
}
