//! HTTP error mapping
//!
//! Domain errors collapse to fixed client messages. Details are logged only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use spamlens::DomainError;
use thiserror::Error;

use crate::models::ErrorResponse;

pub const TEXT_REQUIRED: &str = "Text is required";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Error returned by route handlers
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn text_required() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: TEXT_REQUIRED,
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: SOMETHING_WENT_WRONG,
        }
    }

    /// Map a domain error, logging it under `route`
    pub fn from_domain(route: &str, err: DomainError) -> Self {
        if err.is_user_error() {
            return Self::text_required();
        }
        tracing::error!("❌ {} error: {}", route, err);
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}
