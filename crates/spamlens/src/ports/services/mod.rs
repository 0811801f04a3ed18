//! Service Ports
//!
//! Interfaces for external services reached over the network.

mod classifier;

pub use classifier::*;
