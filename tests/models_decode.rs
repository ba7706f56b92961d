//! Decoding of recorded API responses into the typed models

mod common;

use common::fixture;
use ssllabs::models::Endpoint;
use ssllabs::{parse_results, Host, HostStatus, LabsError};

fn full_report() -> Host {
    serde_json::from_str(&fixture("analyze-full.json")).unwrap()
}

#[test]
fn test_full_report_top_level() {
    let report = full_report();
    assert_eq!(report.host, "www.ssllabs.com");
    assert_eq!(report.port, 443);
    assert_eq!(report.status, HostStatus::Ready);
    assert!(report.started_at().is_some());
    assert!(report.tested_at().unwrap() > report.started_at().unwrap());
}

#[test]
fn test_full_report_certificates() {
    let report = full_report();
    let endpoint = &report.endpoints[0];
    let details = endpoint.details.as_ref().unwrap();

    let chain = &details.cert_chains[0];
    assert!(chain.trusted_by("Mozilla"));
    assert!(!chain.trusted_by("Android"));

    let leaf = report.cert(&chain.cert_ids[0]).unwrap();
    assert_eq!(leaf.common_names, vec!["ssllabs.com"]);
    assert_eq!(leaf.crl_uris.len(), 1);
    assert_eq!(leaf.ocsp_uris, vec!["http://ocsp.digicert.com"]);
    assert_eq!(
        leaf.caa_policy.as_ref().unwrap().caa_records[0].value,
        "digicert.com"
    );
    assert!(leaf.valid_from().unwrap() < leaf.valid_until().unwrap());
    assert!(report.cert("unknown").is_none());
}

#[test]
fn test_full_report_protocols_and_suites() {
    let report = full_report();
    let details = report.endpoints[0].details.as_ref().unwrap();

    let labels: Vec<String> = details.protocols.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["TLS 1.2", "TLS 1.3"]);
    assert_eq!(details.suite_count(), 3);
    assert!(details.suites.iter().flat_map(|s| &s.list).all(|s| !s.is_weak()));
    assert_eq!(details.named_groups.as_ref().unwrap().list.len(), 2);
    assert!(details.implements_tls13_mandatory_cs);
}

#[test]
fn test_full_report_policies_and_http() {
    let report = full_report();
    let details = report.endpoints[0].details.as_ref().unwrap();

    let hsts = details.hsts_policy.as_ref().unwrap();
    assert!(hsts.has_long_max_age());
    assert!(hsts.include_sub_domains);
    assert_eq!(details.hsts_preloads[0].source, "Chrome");
    assert_eq!(details.hpkp_policy.as_ref().unwrap().status, "absent");

    let tx = &details.http_transactions[0];
    assert_eq!(tx.status_code, 200);
    assert_eq!(tx.header("server"), Some("Apache"));
    assert!(details.vulnerabilities().is_empty());

    let failed: Vec<&str> = details
        .sims
        .failures()
        .map(|s| s.client.name.as_str())
        .collect();
    assert_eq!(failed, vec!["IE"]);
}

#[test]
fn test_unknown_status_passes_through() {
    let report: Host =
        serde_json::from_str(r#"{"host":"example.com","status":"QUEUED"}"#).unwrap();
    assert_eq!(report.status, HostStatus::Other("QUEUED".to_string()));
    assert_eq!(report.status.as_str(), "QUEUED");

    let back = serde_json::to_value(&report).unwrap();
    assert_eq!(back["status"], "QUEUED");
}

#[test]
fn test_in_progress_endpoint() {
    let report: Host = serde_json::from_str(&fixture("analyze-in-progress.json")).unwrap();
    let endpoint: &Endpoint = &report.endpoints[0];
    assert!(!endpoint.is_ready());
    assert_eq!(endpoint.ready_grade(), None);
    assert_eq!(endpoint.progress, 40);
    assert!(endpoint.details.is_none());
}

#[test]
fn test_parse_results_array() {
    let body = format!(
        "[{},{}]",
        fixture("analyze-ready.json"),
        fixture("lbl.json")
    );
    let hosts = parse_results(body.as_bytes()).unwrap();
    let names: Vec<&str> = hosts.iter().map(|h| h.host.as_str()).collect();
    assert_eq!(names, vec!["ssllabs.com", "lbl.gov"]);
}

#[test]
fn test_parse_results_rejects_garbage() {
    assert!(matches!(
        parse_results(b"{not json"),
        Err(LabsError::Decode { .. })
    ));
}
