//! Message Routes - Submission and Listing
//!
//! HTTP handlers that delegate to IngestionService and ListingService.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{CreateMessageRequest, ErrorResponse, MessageResponse};
use crate::AppState;

/// Classify and store a message
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message classified and stored", body = MessageResponse),
        (status = 400, description = "Text missing or empty", body = ErrorResponse),
        (status = 500, description = "Classifier or storage failure", body = ErrorResponse)
    ),
    tag = "Message"
)]
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // An unreadable body carries no usable text
    let text = match payload {
        Ok(Json(request)) => request.text,
        Err(rejection) => {
            tracing::warn!("Rejected message body: {}", rejection);
            None
        }
    };

    let stored = state
        .ingestion
        .ingest(text)
        .await
        .map_err(|e| ApiError::from_domain("POST /api/messages", e))?;

    Ok(Json(stored.into()))
}

/// List stored messages, newest first
#[utoipa::path(
    get,
    path = "/api/messages",
    responses(
        (status = 200, description = "All messages, newest first", body = Vec<MessageResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Message"
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state
        .listing
        .list_recent()
        .await
        .map_err(|e| ApiError::from_domain("GET /api/messages", e))?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/messages", get(list_messages).post(create_message))
}
