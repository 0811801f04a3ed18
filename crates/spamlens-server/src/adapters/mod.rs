//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod classifier;
pub mod memory;
pub mod postgres;

// Re-exports
pub use classifier::HttpClassifier;
pub use memory::InMemoryMessageRepository;
pub use postgres::PgMessageRepository;
