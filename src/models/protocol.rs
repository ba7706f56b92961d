//! Protocol, cipher suite and named group tables

use serde::{Deserialize, Serialize};

/// A protocol version supported by the endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Protocol {
    pub id: i32,
    pub name: String,
    pub version: String,
    pub v2_suites_disabled: bool,
    /// 0 when the protocol is insecure
    pub q: Option<i32>,
}

impl Protocol {
    /// e.g. "TLS 1.3"
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// Cipher suites offered for one protocol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolSuites {
    pub protocol: i32,
    pub list: Vec<Suite>,
    pub preference: bool,
    pub cha_cha20_preference: bool,
}

impl ProtocolSuites {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// A single cipher suite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Suite {
    pub id: i32,
    pub name: String,
    pub cipher_strength: i32,
    pub kx_type: String,
    pub kx_strength: i32,
    pub dh_p: i32,
    pub dh_g: i32,
    pub dh_ys: i32,
    pub named_group_bits: i32,
    pub named_group_id: i32,
    pub named_group_name: String,
    pub q: Option<i32>,
}

impl Suite {
    /// Flagged weak by the service (`q == 0`)
    pub fn is_weak(&self) -> bool {
        self.q == Some(0)
    }
}

/// Named groups (curves) supported by the endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedGroups {
    pub list: Vec<NamedGroup>,
    pub preference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedGroup {
    pub id: i32,
    pub name: String,
    pub bits: i32,
}
