//! Terminal rendering of reports, endpoints and service info

use super::grade::{print_grade, print_grade_compact};
use super::tables::print_table;
use crate::models::{Cert, Endpoint, EndpointDetails, Host, Info, StatusCodes};
use crate::utils::progress::{print_mark, Mark};
use chrono::{DateTime, Utc};
use console::style;

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

fn format_time(t: Option<DateTime<Utc>>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn yes_no(v: bool) -> String {
    let text = if v { "✓ Yes" } else { "✗ No" };
    text.to_string()
}

/// Print a host report; `detailed` adds certificates and per-endpoint details
pub fn print_report(report: &Host, detailed: bool) {
    print_header(&format!("SSL Labs report for {}", report.host));

    println!("  Status:       {}", style(&report.status).bold());
    if !report.status_message.is_empty() {
        println!("  Message:      {}", report.status_message);
    }
    println!("  Started:      {}", format_time(report.started_at()));
    println!("  Tested:       {}", format_time(report.tested_at()));
    println!(
        "  Engine:       {} (criteria {})",
        report.engine_version, report.criteria_version
    );

    if let Some(grade) = report.endpoints.first().and_then(Endpoint::ready_grade) {
        print_grade(&report.host, grade);
    }

    if !report.endpoints.is_empty() {
        let rows: Vec<Vec<String>> = report
            .endpoints
            .iter()
            .map(|ep| {
                vec![
                    ep.ip_address.clone(),
                    ep.server_name.clone(),
                    ep.status_message.clone(),
                    ep.ready_grade().unwrap_or("-").to_string(),
                    yes_no(ep.has_warnings),
                ]
            })
            .collect();
        print_table(&["IP address", "Server name", "Status", "Grade", "Warnings"], &rows);
    }

    if detailed {
        if !report.certs.is_empty() {
            print_certificates(&report.certs);
        }
        for ep in &report.endpoints {
            if let Some(details) = &ep.details {
                print_header(&format!("Endpoint {}", ep.ip_address));
                print_details(details);
            }
        }
    }
}

/// Print one endpoint as returned by `getEndpointData`
pub fn print_endpoint(host: &str, ep: &Endpoint) {
    print_header(&format!("Endpoint {} ({})", ep.ip_address, host));
    print_grade_compact("Grade", ep.ready_grade().unwrap_or(""));
    print_grade_compact("Grade ignoring trust", &ep.grade_trust_ignored);
    if !ep.future_grade.is_empty() {
        print_grade_compact("Future grade", &ep.future_grade);
    }
    println!("  Status:       {}", ep.status_message);
    if !ep.status_details_message.is_empty() {
        println!("  Details:      {}", ep.status_details_message);
    }
    if let Some(details) = &ep.details {
        print_details(details);
    }
}

fn print_certificates(certs: &[Cert]) {
    print_header("Certificates");
    let now = Utc::now();
    let rows: Vec<Vec<String>> = certs
        .iter()
        .map(|c| {
            let expiry = match c.days_until_expiry(now) {
                Some(d) if d < 0 => "✗ EXPIRED".to_string(),
                Some(d) => format!("{} days", d),
                None => "-".to_string(),
            };
            vec![
                c.subject.clone(),
                c.issuer_subject.clone(),
                format!("{} {}", c.key_alg, c.key_size),
                format_time(c.valid_until()),
                expiry,
            ]
        })
        .collect();
    print_table(&["Subject", "Issuer", "Key", "Valid until", "Expires in"], &rows);
}

fn print_details(details: &EndpointDetails) {
    let protocols: Vec<Vec<String>> = details
        .protocols
        .iter()
        .map(|p| {
            let suites = details
                .suites
                .iter()
                .find(|s| s.protocol == p.id)
                .map(|s| s.len())
                .unwrap_or(0);
            vec![p.label(), suites.to_string()]
        })
        .collect();
    if !protocols.is_empty() {
        print_table(&["Protocol", "Suites"], &protocols);
    }

    println!();
    let vulns = details.vulnerabilities();
    if vulns.is_empty() {
        print_mark(Mark::Pass, "No known vulnerabilities reported");
    } else {
        for v in vulns {
            print_mark(Mark::Fail, &format!("Vulnerable to {}", v));
        }
    }

    match &details.hsts_policy {
        Some(hsts) if hsts.has_long_max_age() => {
            print_mark(Mark::Pass, &format!("HSTS max-age {}", hsts.max_age))
        }
        Some(hsts) if hsts.is_present() => {
            print_mark(Mark::Warn, &format!("HSTS max-age {} is short", hsts.max_age))
        }
        _ => print_mark(Mark::Warn, "HSTS not present"),
    }

    if details.ocsp_stapling {
        print_mark(Mark::Pass, "OCSP stapling");
    }

    let failures = details.sims.failures().count();
    if failures > 0 {
        print_mark(
            Mark::Warn,
            &format!("{} simulated clients failed to connect", failures),
        );
    } else if !details.sims.results.is_empty() {
        print_mark(
            Mark::Info,
            &format!("All {} simulated clients connected", details.sims.results.len()),
        );
    }
}

/// Print engine information
pub fn print_info(info: &Info) {
    print_header("SSL Labs Info");
    println!("  Engine version:       {}", info.engine_version);
    println!("  Criteria version:     {}", info.criteria_version);
    println!(
        "  Assessments:          {}/{}",
        info.current_assessments, info.max_assessments
    );
    println!("  New assessment delay: {} ms", info.new_assessment_cool_off);
    for message in &info.messages {
        print_mark(Mark::Info, message);
    }
}

/// Print the status code translation table
pub fn print_status_codes(codes: &StatusCodes) {
    print_header("Status codes");
    let rows: Vec<Vec<String>> = codes
        .status_details
        .iter()
        .map(|(k, v)| vec![k.clone(), v.clone()])
        .collect();
    print_table(&["Code", "Description"], &rows);
}
