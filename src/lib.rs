//! SSL Labs API client
//!
//! An async client for the Qualys SSL Labs v3 assessment API:
//! - Submitting hosts for assessment and polling until the report is ready
//! - Grade lookup for the first endpoint of a host
//! - Cached endpoint data, engine info and status code translations
//! - Typed models for the full report (certificates, protocols, suites,
//!   handshake simulations, HSTS/HPKP policies, vulnerability flags)
//!
//! # Usage
//!
//! ```rust,ignore
//! use ssllabs::Client;
//!
//! #[tokio::main]
//! async fn main() -> ssllabs::Result<()> {
//!     let client = Client::new()?;
//!     let grade = client.get_grade("www.ssllabs.com", &[]).await?;
//!     println!("{}", grade);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use client::{
    build_url, merge_options, parse_results, version, Client, ClientConfig, ErrorStatusPolicy,
    HttpTransport, Options, Transport, TransportResponse, API_VERSION,
};
pub use config::Settings;
pub use models::{Endpoint, Host, HostStatus, Info, StatusCodes};
pub use utils::{ConfigError, LabsError, Result, TransportError, NO_GRADE};
pub use tokio_util::sync::CancellationToken;
