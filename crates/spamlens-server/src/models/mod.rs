//! SpamLens Data Models
//!
//! - Message: submitted text and its classification
//! - Status: service probes and error bodies

mod message;
mod status;

pub use message::*;
pub use status::*;
