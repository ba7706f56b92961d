//! HTTP transport seam
//!
//! The client talks to the service only through [`Transport`], so tests and
//! embedders can substitute their own implementation.

use crate::utils::TransportError;
use async_trait::async_trait;
use std::time::Duration;

/// Status code and raw body of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET request
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by `reqwest`
///
/// Proxy settings are taken from the usual environment variables.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ssllabs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Setup {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| TransportError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Connection {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
