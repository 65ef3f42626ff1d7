use axum::http::StatusCode;
use murmur_db::StoreError;
use thiserror::Error;
use tracing::error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("username is already taken")]
    UsernameTaken,

    #[error("unknown username or wrong password")]
    InvalidCredentials,

    #[error("account {0} does not exist")]
    UnknownAccount(i64),

    #[error("message {0} does not exist")]
    MessageNotFound(i64),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Clients only ever see a status code; the cause stays in the logs.
impl From<ServiceError> for StatusCode {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(_)
            | ServiceError::UsernameTaken
            | ServiceError::UnknownAccount(_)
            | ServiceError::MessageNotFound(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::Store(e) => {
                error!("Store failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Join(e) => {
                error!("spawn_blocking join error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
