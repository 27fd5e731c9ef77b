use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{parse_lenient, LoginRequest, RegisterRequest},
        response::{LoginResponse, MessageResponse, RegisterResponse, UserDto},
    },
};

pub async fn register(
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: RegisterRequest = parse_lenient(&body);

    let (user, token) = state.account_service.register(request).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registration successful".to_string(),
        token: token.key,
        user: UserDto::from(user),
    }))
}

pub async fn login(
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: LoginRequest = parse_lenient(&body);

    let (user, token, profile) = state.account_service.login(request).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::new(
        "Login successful",
        token.key,
        user,
        &profile,
    )))
}

pub async fn logout(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.account_service.logout(&auth.0).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Logged out")))
}
