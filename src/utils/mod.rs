//! Utility modules
//!
//! Error types and CLI progress helpers.

pub mod error;
pub mod progress;

pub use error::{ConfigError, LabsError, Result, TransportError, NO_GRADE};
