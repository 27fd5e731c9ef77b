pub mod auth_handler;
pub mod health_handler;
pub mod profile_handler;
pub mod question_handler;
pub mod score_handler;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;

/// Resources answer wrong-method calls with the JSON error body instead of
/// the framework's bare 405.
async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

fn guarded(resource: actix_web::Resource) -> actix_web::Resource {
    resource.default_service(web::route().to(method_not_allowed))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(guarded(
        web::resource("/api/questions").route(web::get().to(question_handler::list_questions)),
    ))
    .service(guarded(
        web::resource("/api/scores")
            .route(web::get().to(score_handler::list_scores))
            .route(web::post().to(score_handler::submit_score)),
    ))
    .service(guarded(
        web::resource("/api/register").route(web::post().to(auth_handler::register)),
    ))
    .service(guarded(
        web::resource("/api/login").route(web::post().to(auth_handler::login)),
    ))
    .service(guarded(
        web::resource("/api/logout").route(web::post().to(auth_handler::logout)),
    ))
    .service(guarded(
        web::resource("/api/profile").route(web::get().to(profile_handler::get_profile)),
    ))
    .service(guarded(
        web::resource("/api/account").route(web::delete().to(profile_handler::delete_account)),
    ))
    .service(web::resource("/health").route(web::get().to(health_handler::health_check)))
    .service(web::resource("/health/live").route(web::get().to(health_handler::health_check_live)))
    .service(
        web::resource("/health/ready").route(web::get().to(health_handler::health_check_ready)),
    );
}
