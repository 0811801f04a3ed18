//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod label;

pub use label::*;
