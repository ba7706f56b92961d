//! HSTS and HPKP policy records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HSTS policy observed on the endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HstsPolicy {
    #[serde(rename = "LONG_MAX_AGE")]
    pub long_max_age: i64,
    pub header: String,
    /// unknown, absent, invalid, disabled or present
    pub status: String,
    pub error: String,
    pub max_age: i64,
    pub include_sub_domains: bool,
    pub preload: bool,
    pub directives: BTreeMap<String, String>,
}

impl HstsPolicy {
    pub fn is_present(&self) -> bool {
        self.status == "present"
    }

    /// Present with a max-age at least as long as the service's threshold
    pub fn has_long_max_age(&self) -> bool {
        self.is_present() && self.long_max_age > 0 && self.max_age >= self.long_max_age
    }
}

/// HSTS preload list status from one source (Chrome, Firefox, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HstsPreload {
    pub source: String,
    pub host_name: String,
    pub status: String,
    pub error: String,
    pub source_time: i64,
}

/// HPKP policy, from either the enforcing or the report-only header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HpkpPolicy {
    pub header: String,
    pub status: String,
    pub error: String,
    pub max_age: i64,
    pub include_sub_domains: bool,
    pub report_uri: String,
    pub pins: Vec<HpkpPin>,
    pub matched_pins: Vec<HpkpPin>,
    pub directives: Vec<HpkpDirective>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HpkpPin {
    pub hash_function: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HpkpDirective {
    pub name: String,
    pub value: String,
}

/// Pins compiled into browsers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticPkpPolicy {
    pub status: String,
    pub error: String,
    pub include_sub_domains: bool,
    pub report_uri: String,
    pub pins: Vec<String>,
    pub matched_pins: Vec<String>,
    pub forbidden_pins: Vec<String>,
    pub matched_forbidden_pins: Vec<String>,
}
