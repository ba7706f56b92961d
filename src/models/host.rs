//! Host report returned by the `analyze` endpoint

use super::{Cert, Endpoint};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment status of a host
///
/// The service reports this as a loose string. Known values get their own
/// variant; anything else is carried through verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HostStatus {
    Dns,
    InProgress,
    Ready,
    Error,
    Other(String),
}

impl HostStatus {
    pub fn as_str(&self) -> &str {
        match self {
            HostStatus::Dns => "DNS",
            HostStatus::InProgress => "IN_PROGRESS",
            HostStatus::Ready => "READY",
            HostStatus::Error => "ERROR",
            HostStatus::Other(s) => s,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, HostStatus::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HostStatus::Error)
    }
}

impl Default for HostStatus {
    fn default() -> Self {
        HostStatus::Other(String::new())
    }
}

impl From<String> for HostStatus {
    fn from(s: String) -> Self {
        match s.trim() {
            "DNS" => HostStatus::Dns,
            "IN_PROGRESS" => HostStatus::InProgress,
            "READY" => HostStatus::Ready,
            "ERROR" => HostStatus::Error,
            _ => HostStatus::Other(s),
        }
    }
}

impl From<&str> for HostStatus {
    fn from(s: &str) -> Self {
        HostStatus::from(s.to_string())
    }
}

impl From<HostStatus> for String {
    fn from(status: HostStatus) -> Self {
        match status {
            HostStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One assessment of a host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Host {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub is_public: bool,
    pub status: HostStatus,
    pub status_message: String,
    /// Milliseconds since the epoch
    pub start_time: i64,
    /// Milliseconds since the epoch
    pub test_time: i64,
    pub engine_version: String,
    pub criteria_version: String,
    pub cache_expiry_time: i64,
    pub cert_hostnames: Vec<String>,
    pub endpoints: Vec<Endpoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certs: Vec<Cert>,
}

impl Host {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.start_time)
    }

    pub fn tested_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.test_time)
    }

    pub fn cache_expires_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.cache_expiry_time)
    }

    /// Look up a certificate by the id used in certificate chains
    pub fn cert(&self, id: &str) -> Option<&Cert> {
        self.certs.iter().find(|c| c.id == id)
    }
}

/// Convert an epoch-milliseconds timestamp; zero means "not set"
pub(crate) fn millis_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    if ms <= 0 {
        return None;
    }
    Utc.timestamp_millis_opt(ms).single()
}
