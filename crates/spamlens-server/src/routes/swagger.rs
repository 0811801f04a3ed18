//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateMessageRequest, ErrorResponse, HealthCheck, MessageResponse, StatusResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Status endpoints
        super::status::root_status,
        super::status::health_check,
        // Message endpoints
        super::message::create_message,
        super::message::list_messages,
    ),
    info(
        title = "SpamLens API",
        version = "0.1.0",
        description = "Submit short text messages, classify them as spam or ham, and list recent results.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Status probes"),
        (name = "Message", description = "Message submission and listing"),
    ),
    components(
        schemas(
            CreateMessageRequest,
            MessageResponse,
            ErrorResponse,
            StatusResponse,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
