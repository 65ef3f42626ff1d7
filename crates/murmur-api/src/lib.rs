pub mod accounts;
pub mod error;
pub mod messages;
pub mod routes;
pub mod service;
pub mod validation;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::debug;

pub use error::ServiceError;
pub use routes::router;
pub use service::SocialService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub service: SocialService,
}

/// An unreadable body is a bad request no matter which extractor check
/// failed (content type, syntax, or missing fields).
pub(crate) fn malformed_body(rejection: JsonRejection) -> StatusCode {
    debug!("Rejected request body: {}", rejection.body_text());
    StatusCode::BAD_REQUEST
}
