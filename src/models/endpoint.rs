//! Per-endpoint results and their full details

use super::{
    CertificateChain, DrownHost, HpkpPolicy, HstsPolicy, HstsPreload, HttpTransaction,
    NamedGroups, Protocol, ProtocolSuites, SimDetails, StaticPkpPolicy,
};
use serde::{Deserialize, Serialize};

/// Endpoint status message signalling a finished assessment
pub const ENDPOINT_READY: &str = "Ready";

/// One IP address of a host under assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    pub ip_address: String,
    pub server_name: String,
    pub status_message: String,
    pub status_details: String,
    pub status_details_message: String,
    /// Only meaningful when [`Endpoint::is_ready`] is true
    pub grade: String,
    pub grade_trust_ignored: String,
    pub future_grade: String,
    pub has_warnings: bool,
    pub is_exceptional: bool,
    pub progress: i32,
    pub duration: i64,
    pub eta: i64,
    pub delegation: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<EndpointDetails>,
}

impl Endpoint {
    pub fn is_ready(&self) -> bool {
        self.status_message == ENDPOINT_READY
    }

    /// The grade, if the endpoint finished and produced one
    pub fn ready_grade(&self) -> Option<&str> {
        if self.is_ready() && !self.grade.is_empty() {
            Some(&self.grade)
        } else {
            None
        }
    }
}

/// Full assessment detail, present only when requested with `all=done`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointDetails {
    pub host_start_time: i64,
    pub cert_chains: Vec<CertificateChain>,
    pub protocols: Vec<Protocol>,
    pub suites: Vec<ProtocolSuites>,
    pub no_sni_suites: Option<ProtocolSuites>,
    pub named_groups: Option<NamedGroups>,
    pub server_signature: String,
    pub prefix_delegation: bool,
    pub non_prefix_delegation: bool,
    pub vuln_beast: bool,
    pub reneg_support: i32,
    pub session_resumption: i32,
    pub compression_methods: i32,
    pub supports_npn: bool,
    pub npn_protocols: String,
    pub supports_alpn: bool,
    pub alpn_protocols: String,
    pub session_tickets: i32,
    pub ocsp_stapling: bool,
    pub stapling_revocation_status: i32,
    pub stapling_revocation_error_message: String,
    pub sni_required: bool,
    pub http_status_code: i32,
    pub http_forwarding: String,
    pub supports_rc4: bool,
    pub rc4_with_modern: bool,
    pub rc4_only: bool,
    pub forward_secrecy: i32,
    pub protocol_intolerance: i32,
    pub misc_intolerance: i32,
    pub sims: SimDetails,
    pub heartbleed: bool,
    pub heartbeat: bool,
    pub open_ssl_ccs: i32,
    #[serde(rename = "openSSLLuckyMinus20")]
    pub openssl_lucky_minus20: i32,
    pub ticketbleed: i32,
    pub bleichenbacher: i32,
    pub zombie_poodle: i32,
    pub golden_doodle: i32,
    pub zero_length_padding_oracle: i32,
    pub sleeping_poodle: i32,
    pub poodle: bool,
    pub poodle_tls: i32,
    pub fallback_scsv: bool,
    pub freak: bool,
    pub has_sct: i32,
    pub dh_primes: Vec<String>,
    pub dh_uses_known_primes: i32,
    pub dh_ys_reuse: bool,
    pub ecdh_parameter_reuse: bool,
    pub logjam: bool,
    pub cha_cha20_preference: bool,
    pub hsts_policy: Option<HstsPolicy>,
    pub hsts_preloads: Vec<HstsPreload>,
    pub hpkp_policy: Option<HpkpPolicy>,
    pub hpkp_ro_policy: Option<HpkpPolicy>,
    pub static_pkp_policy: Option<StaticPkpPolicy>,
    pub http_transactions: Vec<HttpTransaction>,
    pub drown_hosts: Vec<DrownHost>,
    pub drown_errors: bool,
    pub drown_vulnerable: bool,
    #[serde(rename = "implementsTLS13MandatoryCS")]
    pub implements_tls13_mandatory_cs: bool,
}

impl EndpointDetails {
    /// Names of the well-known vulnerabilities this endpoint is flagged for
    pub fn vulnerabilities(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if self.vuln_beast {
            found.push("BEAST");
        }
        if self.heartbleed {
            found.push("Heartbleed");
        }
        // openSslCcs: 3 = vulnerable and exploitable
        if self.open_ssl_ccs == 3 {
            found.push("OpenSSL CCS injection");
        }
        // 2 = vulnerable
        if self.openssl_lucky_minus20 == 2 {
            found.push("OpenSSL Lucky13 (CVE-2016-2107)");
        }
        if self.ticketbleed == 2 {
            found.push("Ticketbleed");
        }
        if self.bleichenbacher == 2 || self.bleichenbacher == 3 {
            found.push("ROBOT");
        }
        if self.poodle {
            found.push("POODLE (SSLv3)");
        }
        if self.poodle_tls == 2 {
            found.push("POODLE (TLS)");
        }
        if self.freak {
            found.push("FREAK");
        }
        if self.logjam {
            found.push("Logjam");
        }
        if self.drown_vulnerable {
            found.push("DROWN");
        }
        found
    }

    /// Total number of cipher suites offered across protocols
    pub fn suite_count(&self) -> usize {
        self.suites.iter().map(ProtocolSuites::len).sum()
    }
}
