use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use murmur_types::api::{PostMessageRequest, UpdateMessageRequest};
use murmur_types::models::Message;

use crate::{AppState, malformed_body};

pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, StatusCode> {
    let Json(req) = payload.map_err(malformed_body)?;

    let message = state
        .service
        .post_message(req.posted_by, req.text, req.posted_at_epoch)
        .await?;
    Ok(Json(message))
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    Ok(Json(state.service.list_messages().await?))
}

/// A missing message is still a 200, just with nothing in the body.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = state.service.get_message(message_id).await?;
    Ok(found_or_empty(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = state.service.delete_message(message_id).await?;
    Ok(found_or_empty(message))
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, StatusCode> {
    let Json(req) = payload.map_err(malformed_body)?;

    let message = state.service.update_message(message_id, req.text).await?;
    Ok(Json(message))
}

pub async fn list_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    Ok(Json(state.service.list_messages_by_account(account_id).await?))
}

fn found_or_empty(message: Option<Message>) -> Response {
    match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
