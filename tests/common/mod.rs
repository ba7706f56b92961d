//! Scripted transport shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ssllabs::client::{Transport, TransportResponse};
use ssllabs::{Client, ClientConfig, TransportError};
use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_URL: &str = "http://localhost:10000";

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("missing fixture {name}: {e}"))
}

/// Replies with queued responses in order and records every URL requested
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: impl Into<String>) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body.into().into_bytes())));
        self
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Path and decoded query parameters of the n-th request
    pub fn request(&self, n: usize) -> (String, BTreeMap<String, String>) {
        let url = self.requests()[n].clone();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        let params = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        (path.to_string(), params)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other(format!("no scripted reply for {url}"))))
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        base_url: TEST_URL.to_string(),
        poll_interval: Duration::from_secs(2),
        ..Default::default()
    }
}

pub fn client_with(transport: &Arc<ScriptedTransport>) -> Client {
    Client::with_transport(test_config(), transport.clone())
}

pub fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
