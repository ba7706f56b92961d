//! Configuration
//!
//! Client settings loaded from TOML files.

pub mod settings;

pub use settings::{ApiSettings, Settings};
