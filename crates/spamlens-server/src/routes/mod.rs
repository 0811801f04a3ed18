//! SpamLens API Routes
//!
//! - / and /health - Status probes
//! - /api/messages - Submit and list classified messages
//! - /swagger-ui - OpenAPI documentation

pub mod message;
pub mod status;
pub mod swagger;
