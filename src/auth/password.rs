use crate::errors::{AppError, AppResult};

/// bcrypt is CPU-bound; both operations run on the blocking pool so they
/// never stall the request executor.
pub async fn hash(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(&password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|err| AppError::InternalError(format!("hashing task failed: {}", err)))?
        .map_err(AppError::from)
}

pub async fn verify(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
        .await
        .map_err(|err| AppError::InternalError(format!("verification task failed: {}", err)))?
        .map_err(AppError::from)
}
