//! Domain Entities
//!
//! - Prediction: Validated classifier output
//! - NewMessage: Classified message ready to be stored
//! - StoredMessage: Message exactly as persisted
//! - NormalizedMessage: Stable listing shape with defaults applied

mod message;
mod prediction;

pub use message::*;
pub use prediction::*;
