use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::response::{MessageResponse, ProfileResponse},
};

pub async fn get_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.account_service.current_profile(&auth.0).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::new(&auth.0, &profile)))
}

pub async fn delete_account(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.account_service.delete_account(&auth.0).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Account deleted")))
}
