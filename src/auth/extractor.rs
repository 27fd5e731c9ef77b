use std::sync::Arc;

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{app_state::AppState, errors::AppError, models::domain::User};

fn auth_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn app_state(req: &HttpRequest) -> Result<web::Data<Arc<AppState>>, AppError> {
    req.app_data::<web::Data<Arc<AppState>>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("application state not configured".to_string()))
}

/// Resolved caller identity for routes that require authentication. The
/// credential is looked up on extraction, so handlers receive a full `User`.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = app_state(&req)?;

            let header = auth_header(&req).ok_or_else(|| {
                AppError::Unauthenticated("missing authorization header".to_string())
            })?;

            let user = state
                .token_service
                .resolve(&header)
                .await?
                .ok_or_else(|| {
                    AppError::Unauthenticated("invalid or unknown token".to_string())
                })?;

            Ok(AuthenticatedUser(user))
        })
    }
}

/// Caller identity for routes where authentication is optional: an absent or
/// unresolvable credential degrades to a guest instead of rejecting the
/// request.
pub struct MaybeUser(pub Option<User>);

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = app_state(&req)?;

            let Some(header) = auth_header(&req) else {
                return Ok(MaybeUser(None));
            };

            let user = state.token_service.resolve(&header).await?;
            Ok(MaybeUser(user))
        })
    }
}
