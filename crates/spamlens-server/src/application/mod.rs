//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the message store and the classifier.

mod ingestion_service;
mod listing_service;

pub use ingestion_service::IngestionService;
pub use listing_service::ListingService;
