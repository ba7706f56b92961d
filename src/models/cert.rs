//! Certificates and certificate chains as reported by SSL Labs

use super::host::millis_to_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An X.509 certificate seen during the assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cert {
    pub id: String,
    pub subject: String,
    pub serial_number: String,
    pub common_names: Vec<String>,
    pub alt_names: Vec<String>,
    pub not_before: i64,
    pub not_after: i64,
    pub issuer_subject: String,
    pub sig_alg: String,
    pub revocation_info: i32,
    #[serde(rename = "crlURIs")]
    pub crl_uris: Vec<String>,
    #[serde(rename = "ocspURIs")]
    pub ocsp_uris: Vec<String>,
    pub revocation_status: i32,
    pub crl_revocation_status: i32,
    pub ocsp_revocation_status: i32,
    pub dns_caa: bool,
    pub caa_policy: Option<CaaPolicy>,
    pub must_staple: bool,
    pub sgc: i32,
    pub validation_type: String,
    pub issues: i32,
    pub sct: bool,
    pub sha1_hash: String,
    pub sha256_hash: String,
    pub pin_sha256: String,
    pub key_alg: String,
    pub key_size: i32,
    pub key_strength: i32,
    pub key_known_debian_insecure: bool,
    pub raw: String,
}

impl Cert {
    pub fn valid_from(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.not_before)
    }

    pub fn valid_until(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.not_after)
    }

    /// Days until expiry relative to `now`; negative once expired
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.valid_until().map(|end| (end - now).num_days())
    }
}

/// CAA policy discovered for the certificate's hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaaPolicy {
    pub policy_hostname: String,
    pub caa_records: Vec<CaaRecord>,
}

/// A single DNS CAA record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaaRecord {
    pub tag: String,
    pub value: String,
    pub flags: i32,
}

/// Certificate chain served by an endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateChain {
    pub id: String,
    pub cert_ids: Vec<String>,
    pub trustpaths: Vec<TrustPath>,
    pub issues: i32,
    pub no_sni: bool,
}

impl CertificateChain {
    /// Whether any trust path is trusted by the named root store
    pub fn trusted_by(&self, root_store: &str) -> bool {
        self.trustpaths.iter().any(|path| {
            path.trust
                .iter()
                .any(|t| t.root_store == root_store && t.is_trusted)
        })
    }
}

/// One path from a leaf to a trusted root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustPath {
    pub cert_ids: Vec<String>,
    pub trust: Vec<Trust>,
    pub is_pinned: bool,
    pub matched_pins: i32,
    pub un_matched_pins: i32,
}

/// Trust verdict from one root store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trust {
    pub root_store: String,
    pub is_trusted: bool,
    pub trust_error_message: String,
}
