use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use murmur_types::api::{LoginRequest, RegisterRequest};
use murmur_types::models::Account;

use crate::{AppState, malformed_body};

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Account>, StatusCode> {
    let Json(req) = payload.map_err(malformed_body)?;

    let account = state.service.register(req.username, req.password).await?;
    Ok(Json(account))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Account>, StatusCode> {
    let Json(req) = payload.map_err(malformed_body)?;

    let account = state.service.login(req.username, req.password).await?;
    Ok(Json(account))
}
