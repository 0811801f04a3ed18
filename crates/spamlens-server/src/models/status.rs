//! Status and error payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Root status probe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Spam Detection Server Running")]
    pub status: String,
}

/// Liveness probe with build info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Text is required")]
    pub error: String,
}
