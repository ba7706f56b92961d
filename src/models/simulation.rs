//! Client handshake simulation results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimDetails {
    pub results: Vec<Simulation>,
}

impl SimDetails {
    /// Simulated clients that failed to complete a handshake
    pub fn failures(&self) -> impl Iterator<Item = &Simulation> {
        self.results.iter().filter(|s| s.error_code != 0)
    }
}

/// Outcome of simulating one client against the endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Simulation {
    pub client: SimClient,
    /// 0 means the handshake succeeded
    pub error_code: i32,
    pub error_message: String,
    pub attempts: i32,
    pub cert_chain_id: String,
    pub protocol_id: i32,
    pub suite_id: i32,
    pub suite_name: String,
    pub kx_type: String,
    pub kx_strength: i32,
    pub dh_bits: i32,
    pub dh_p: i32,
    pub dh_g: i32,
    pub dh_ys: i32,
    pub named_group_bits: i32,
    pub named_group_id: i32,
    pub named_group_name: String,
    pub alert_type: i32,
    pub alert_code: i32,
    pub key_alg: String,
    pub key_size: i32,
    pub sig_alg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimClient {
    pub id: i32,
    pub name: String,
    pub platform: String,
    pub version: String,
    pub is_reference: bool,
}
