//! SSL Labs API client
//!
//! [`Client`] wraps the four GET endpoints of the v3 API. Only
//! [`Client::analyze`] polls; everything else is a single request.

// Diagnostics are gated on the client's verbosity level rather than only on
// the subscriber filter, so a library user gets the same 0/1/2 behaviour
// regardless of how their subscriber is configured.
macro_rules! labs_verbose {
    ($client:expr, $($arg:tt)+) => {
        if $client.verbosity() >= 1 {
            tracing::info!($($arg)+);
        }
    };
}

macro_rules! labs_debug {
    ($client:expr, $($arg:tt)+) => {
        if $client.verbosity() >= 2 {
            tracing::debug!($($arg)+);
        }
    };
}

mod analyze;
mod decode;
pub mod options;
pub mod query;
pub mod transport;

pub use analyze::grade_from_report;
pub use decode::parse_results;
pub use options::{merge_options, Options};
pub use query::{build_url, build_url_pairs};
pub use transport::{HttpTransport, Transport, TransportResponse};

use crate::models::{ApiErrorResponse, Endpoint, Info, StatusCodes};
use crate::utils::{LabsError, Result};
use decode::decode;
use serde::Deserialize;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Canonical API location
pub const DEFAULT_BASE_URL: &str = "https://api.ssllabs.com/api/v3";
/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Polling attempts before giving up
pub const DEFAULT_RETRIES: u32 = 5;
/// Pause between polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// API generation this client speaks
pub const API_VERSION: &str = "v3";

const ANALYZE: &str = "analyze";
const GET_ENDPOINT_DATA: &str = "getEndpointData";
const GET_STATUS_CODES: &str = "getStatusCodes";
const INFO: &str = "info";

/// What the poll loop does when a report comes back with status `ERROR`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatusPolicy {
    /// Return the errored report straight away
    #[default]
    StopPolling,
    /// Keep polling until `READY` or the retry budget runs out
    KeepPolling,
}

/// Client construction parameters
///
/// Zero or empty values fall back to the defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// 0 = silent, 1 = verbose, 2 = debug
    pub verbosity: u8,
    pub timeout: Duration,
    pub retries: u32,
    pub poll_interval: Duration,
    pub error_policy: ErrorStatusPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verbosity: 0,
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            poll_interval: DEFAULT_POLL_INTERVAL,
            error_policy: ErrorStatusPolicy::default(),
        }
    }
}

impl ClientConfig {
    fn normalized(mut self) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = DEFAULT_BASE_URL.to_string();
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.timeout.is_zero() {
            self.timeout = DEFAULT_TIMEOUT;
        }
        if self.retries == 0 {
            self.retries = DEFAULT_RETRIES;
        }
        self
    }
}

/// Handle on the SSL Labs API
///
/// Holds configuration only; no per-host state. Safe to share between tasks.
pub struct Client {
    base_url: String,
    timeout: Duration,
    retries: u32,
    poll_interval: Duration,
    error_policy: ErrorStatusPolicy,
    level: AtomicU8,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("poll_interval", &self.poll_interval)
            .field("error_policy", &self.error_policy)
            .field("level", &self.verbosity())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client with default settings over HTTPS
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client with the given settings over HTTPS
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let config = config.normalized();
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::build(config, Arc::new(transport)))
    }

    /// Client using a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::build(config.normalized(), transport)
    }

    fn build(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let client = Self {
            base_url: config.base_url,
            timeout: config.timeout,
            retries: config.retries,
            poll_interval: config.poll_interval,
            error_policy: config.error_policy,
            level: AtomicU8::new(config.verbosity),
            transport,
        };
        labs_verbose!(client, base_url = %client.base_url, "client created");
        labs_debug!(client, ?client, "client configuration");
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn error_policy(&self) -> ErrorStatusPolicy {
        self.error_policy
    }

    pub fn verbosity(&self) -> u8 {
        self.level.load(Ordering::Relaxed)
    }

    /// Change the diagnostic level; affects nothing but logging
    pub fn set_verbosity(&self, level: u8) {
        self.level.store(level, Ordering::Relaxed);
    }

    fn endpoint_url(&self, what: &str) -> String {
        format!("{}/{}", self.base_url, what)
    }

    /// GET `what` with `opts` and return the body of a 2xx response
    async fn call_api(&self, what: &str, opts: &Options) -> Result<Vec<u8>> {
        let url = build_url(&self.endpoint_url(what), opts);
        labs_debug!(self, %url, ?opts, "calling API");

        let response = self.transport.get(&url).await?;
        labs_debug!(self, status = response.status, bytes = response.body.len(), "response");

        if response.is_success() {
            return Ok(response.body);
        }

        let api_errors = serde_json::from_slice::<ApiErrorResponse>(&response.body)
            .ok()
            .filter(|r| !r.errors.is_empty());
        tracing::warn!(endpoint = what, status = response.status, "API call failed");
        Err(LabsError::HttpStatus {
            endpoint: what.to_string(),
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
            api_errors,
        })
    }

    /// Engine and capacity information
    pub async fn info(&self) -> Result<Info> {
        let raw = self.call_api(INFO, &Options::new()).await?;
        decode("info", &raw)
    }

    /// Translations for every `statusDetails` code
    pub async fn get_status_codes(&self) -> Result<StatusCodes> {
        let raw = self.call_api(GET_STATUS_CODES, &Options::new()).await?;
        decode("status codes", &raw)
    }

    /// Cached data for one endpoint; never starts an assessment
    pub async fn get_endpoint_data(&self, host: &str, overrides: &[Options]) -> Result<Endpoint> {
        let host = host.trim();
        if host.is_empty() {
            return Err(LabsError::EmptyHost);
        }

        let mut opts = options::endpoint_data_defaults(host);
        for o in overrides {
            opts.merge(o);
        }

        let raw = self.call_api(GET_ENDPOINT_DATA, &opts).await?;
        decode("endpoint", &raw)
    }
}

/// Version of this client library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
