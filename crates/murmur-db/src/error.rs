use rusqlite::ErrorCode;
use thiserror::Error;

/// Failures raised by the store. Absence of a row is never an error here;
/// lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE or FOREIGN KEY constraint rejected the write.
    #[error("constraint violation: {0}")]
    Conflict(String),

    #[error("connection lock poisoned: {0}")]
    LockPoisoned(String),

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::Conflict(err.to_string()),
            _ => Self::Sqlite(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
