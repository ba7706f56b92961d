//! JSON decoding of response bodies

use crate::models::Host;
use crate::utils::{LabsError, Result};
use serde::de::DeserializeOwned;

pub(crate) fn decode<T: DeserializeOwned>(what: &'static str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| LabsError::Decode {
        what,
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Decode a JSON array of host reports, such as saved results of several runs
pub fn parse_results(content: &[u8]) -> Result<Vec<Host>> {
    decode("host list", content)
}
