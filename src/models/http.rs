//! HTTP transactions and DROWN host records

use serde::{Deserialize, Serialize};

/// A request/response pair captured while probing the endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpTransaction {
    pub request_url: String,
    pub status_code: i32,
    pub request_line: String,
    pub request_headers: Vec<String>,
    pub response_line: String,
    pub response_raw_header: Vec<String>,
    pub response_header: Vec<HttpHeader>,
    pub fragile_server: bool,
}

impl HttpTransaction {
    /// Case-insensitive lookup of a response header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response_header
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}

/// A server sharing key material that may expose the endpoint to DROWN
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrownHost {
    pub ip: String,
    pub export: bool,
    pub port: u16,
    pub special: bool,
    pub sslv2: bool,
    pub status: String,
}
