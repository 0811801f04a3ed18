//! SpamLens Domain Library
//!
//! Core domain types and interfaces for the SpamLens message classification demo.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Prediction, NewMessage, StoredMessage)
//!   - `value_objects/`: Immutable value types (Label)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Message store interface
//!   - `services/`: External classifier interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use spamlens::{Classifier, MessageRepository, NewMessage, Prediction};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ClassificationFailure, DomainError, Label, NewMessage, NormalizedMessage, Prediction,
    StoredMessage,
};
pub use ports::{Classifier, MessageRepository};
