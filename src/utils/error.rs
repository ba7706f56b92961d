//! Error types for the SSL Labs client
//!
//! Every failure a caller can observe is a variant of [`LabsError`]. The
//! variants fall into three groups that callers usually want to tell apart:
//! results that are not ready yet, calls that were malformed, and failures
//! on the remote side or in the transport.

use crate::models::ApiErrorResponse;
use thiserror::Error;

/// Grade reported when no usable result exists
pub const NO_GRADE: &str = "Z";

/// Top-level error type for SSL Labs operations
#[derive(Error, Debug)]
pub enum LabsError {
    #[error("empty host")]
    EmptyHost,

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{endpoint} returned HTTP {status}{}", format_api_errors(.api_errors))]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
        api_errors: Option<ApiErrorResponse>,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("retries exceeded after {attempts} attempts")]
    RetriesExceeded { attempts: u32, last_body: String },

    #[error("no endpoint in report")]
    NoEndpoint,

    #[error("endpoint not ready: {status_message}")]
    RemoteStatus { status_message: String },

    #[error("assessment cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn format_api_errors(errors: &Option<ApiErrorResponse>) -> String {
    match errors {
        Some(resp) if !resp.errors.is_empty() => format!(": {}", resp),
        _ => String::new(),
    }
}

impl LabsError {
    /// The grade to report alongside this error
    pub fn fallback_grade(&self) -> &'static str {
        NO_GRADE
    }

    /// The result is not available yet; asking again later may succeed
    pub fn is_retryable_later(&self) -> bool {
        matches!(
            self,
            LabsError::RetriesExceeded { .. }
                | LabsError::RemoteStatus { .. }
                | LabsError::Cancelled
                | LabsError::HttpStatus {
                    status: 429 | 503 | 529,
                    ..
                }
        )
    }

    /// The call itself was malformed and will not succeed as issued
    pub fn is_caller_error(&self) -> bool {
        matches!(self, LabsError::EmptyHost | LabsError::Config(_))
    }

    /// The remote service or the transport failed, possibly transiently
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            LabsError::Transport(_)
                | LabsError::HttpStatus { .. }
                | LabsError::Decode { .. }
                | LabsError::NoEndpoint
        )
    }

    /// Raw response body attached to the error, if any
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            LabsError::HttpStatus { body, .. }
            | LabsError::Decode { body, .. }
            | LabsError::RetriesExceeded {
                last_body: body, ..
            } => Some(body),
            _ => None,
        }
    }
}

/// Failures raised by a [`Transport`](crate::client::Transport)
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("failed to build HTTP client: {message}")]
    Setup { message: String },

    #[error("{0}")]
    Other(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using LabsError
pub type Result<T> = std::result::Result<T, LabsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiError;

    #[test]
    fn test_error_classification() {
        assert!(LabsError::EmptyHost.is_caller_error());
        assert!(!LabsError::EmptyHost.is_remote_failure());

        let exhausted = LabsError::RetriesExceeded {
            attempts: 5,
            last_body: "{}".to_string(),
        };
        assert!(exhausted.is_retryable_later());
        assert_eq!(exhausted.raw_body(), Some("{}"));

        let transport = LabsError::from(TransportError::Timeout {
            url: "https://api.ssllabs.com/api/v3/info".to_string(),
        });
        assert!(transport.is_remote_failure());
        assert!(!transport.is_retryable_later());
    }

    #[test]
    fn test_fallback_grade() {
        assert_eq!(LabsError::NoEndpoint.fallback_grade(), "Z");
        let err = LabsError::RemoteStatus {
            status_message: "Unable to connect to the server".to_string(),
        };
        assert_eq!(err.fallback_grade(), NO_GRADE);
        assert_eq!(
            err.to_string(),
            "endpoint not ready: Unable to connect to the server"
        );
    }

    #[test]
    fn test_http_status_message_includes_api_errors() {
        let err = LabsError::HttpStatus {
            endpoint: "analyze".to_string(),
            status: 400,
            body: String::new(),
            api_errors: Some(ApiErrorResponse {
                errors: vec![ApiError {
                    field: "host".to_string(),
                    message: "qp.mandatory".to_string(),
                }],
            }),
        };
        assert_eq!(err.to_string(), "analyze returned HTTP 400: host: qp.mandatory");

        let bare = LabsError::HttpStatus {
            endpoint: "info".to_string(),
            status: 503,
            body: String::new(),
            api_errors: None,
        };
        assert_eq!(bare.to_string(), "info returned HTTP 503");
    }
}
