//! Submit/poll behaviour of `Client::analyze` against a scripted API

mod common;

use common::{client_with, fixture, params, ScriptedTransport, TEST_URL};
use ssllabs::{
    CancellationToken, Client, ClientConfig, ErrorStatusPolicy, HostStatus, LabsError, Options,
    TransportError,
};
use std::time::Duration;

fn analyze_path() -> String {
    format!("{}/analyze", TEST_URL)
}

#[tokio::test(start_paused = true)]
async fn test_cached_analyze_single_poll() {
    let transport = ScriptedTransport::new();
    transport.reply(200, fixture("analyze-ready.json"));
    let client = client_with(&transport);

    let report = client.analyze("ssllabs.com", false, &[]).await.unwrap();
    assert_eq!(report.status, HostStatus::Ready);
    assert_eq!(report.endpoints[0].grade, "A+");

    assert_eq!(transport.request_count(), 1);
    let (path, query) = transport.request(0);
    assert_eq!(path, analyze_path());
    assert_eq!(
        query,
        params(&[
            ("host", "ssllabs.com"),
            ("publish", "off"),
            ("maxAge", "24"),
            ("fromCache", "off"),
            ("ignoreMismatch", "on"),
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn test_forced_analyze_submits_then_polls() {
    let transport = ScriptedTransport::new();
    transport
        .reply(200, fixture("analyze-dns.json"))
        .reply(200, fixture("analyze-in-progress.json"))
        .reply(200, fixture("analyze-ready.json"));
    let client = client_with(&transport);

    let started = tokio::time::Instant::now();
    let report = client.analyze("ssllabs.com", true, &[]).await.unwrap();
    assert_eq!(report.endpoints[0].grade, "A+");
    assert_eq!(transport.request_count(), 3);
    // one pause between the two polls, none after the submit
    assert_eq!(started.elapsed(), Duration::from_secs(2));

    let (_, submit) = transport.request(0);
    assert_eq!(submit.get("startNew").map(String::as_str), Some("on"));
    assert_eq!(submit.get("all").map(String::as_str), Some("done"));
    assert!(!submit.contains_key("fromCache"));

    for n in 1..3 {
        let (path, poll) = transport.request(n);
        assert_eq!(path, analyze_path());
        assert!(!poll.contains_key("startNew"));
        assert_eq!(poll.get("fromCache").map(String::as_str), Some("on"));
        assert_eq!(poll.get("all").map(String::as_str), Some("done"));
        assert_eq!(poll.get("host").map(String::as_str), Some("ssllabs.com"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_retries_exceeded() {
    let transport = ScriptedTransport::new();
    for _ in 0..5 {
        transport.reply(200, fixture("analyze-in-progress.json"));
    }
    let client = client_with(&transport);

    let started = tokio::time::Instant::now();
    let err = client.analyze("ssllabs.com", false, &[]).await.unwrap_err();
    match &err {
        LabsError::RetriesExceeded { attempts, last_body } => {
            assert_eq!(*attempts, 5);
            assert!(last_body.contains("IN_PROGRESS"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_retryable_later());
    assert_eq!(err.raw_body(), Some(fixture("analyze-in-progress.json").as_str()));
    assert_eq!(transport.request_count(), 5);
    // no pause after the last attempt
    assert_eq!(started.elapsed(), Duration::from_secs(8));
}

#[tokio::test(start_paused = true)]
async fn test_error_status_stops_polling_by_default() {
    let transport = ScriptedTransport::new();
    transport.reply(200, fixture("analyze-error.json"));
    let client = client_with(&transport);

    let report = client
        .analyze("nonexistent.invalid", false, &[])
        .await
        .unwrap();
    assert_eq!(report.status, HostStatus::Error);
    assert_eq!(report.status_message, "Unable to resolve domain name");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_error_status_keep_polling() {
    let transport = ScriptedTransport::new();
    transport
        .reply(200, fixture("analyze-error.json"))
        .reply(200, fixture("analyze-error.json"))
        .reply(200, fixture("analyze-error.json"));
    let config = ClientConfig {
        retries: 3,
        error_policy: ErrorStatusPolicy::KeepPolling,
        ..common::test_config()
    };
    let client = Client::with_transport(config, transport.clone());

    let err = client
        .analyze("nonexistent.invalid", false, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, LabsError::RetriesExceeded { attempts: 3, .. }));
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_empty_host_makes_no_request() {
    let transport = ScriptedTransport::new();
    let client = client_with(&transport);

    for host in ["", "   "] {
        let err = client.analyze(host, true, &[]).await.unwrap_err();
        assert!(matches!(err, LabsError::EmptyHost));
        assert!(err.is_caller_error());
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_transport_error_is_not_retried() {
    let transport = ScriptedTransport::new();
    transport.fail(TransportError::Connection {
        url: analyze_path(),
        message: "connection refused".to_string(),
    });
    let client = client_with(&transport);

    let err = client.analyze("ssllabs.com", false, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        LabsError::Transport(TransportError::Connection { .. })
    ));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_http_status_carries_api_errors() {
    let transport = ScriptedTransport::new();
    transport.reply(400, fixture("api-error.json"));
    let client = client_with(&transport);

    let err = client.analyze("ssllabs.com", false, &[]).await.unwrap_err();
    match &err {
        LabsError::HttpStatus {
            endpoint,
            status,
            api_errors,
            ..
        } => {
            assert_eq!(endpoint, "analyze");
            assert_eq!(*status, 400);
            let api_errors = api_errors.as_ref().unwrap();
            assert_eq!(api_errors.errors[0].field, "host");
            assert_eq!(api_errors.errors[0].message, "qp.mandatory");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("qp.mandatory"));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_overloaded_service_is_retryable_later() {
    let transport = ScriptedTransport::new();
    transport.reply(529, "");
    let client = client_with(&transport);

    let err = client.analyze("ssllabs.com", false, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        LabsError::HttpStatus {
            status: 529,
            api_errors: None,
            ..
        }
    ));
    assert!(err.is_retryable_later());
}

#[tokio::test(start_paused = true)]
async fn test_undecodable_body() {
    let transport = ScriptedTransport::new();
    transport.reply(200, "<html>maintenance</html>");
    let client = client_with(&transport);

    let err = client.analyze("ssllabs.com", false, &[]).await.unwrap_err();
    match &err {
        LabsError::Decode { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_before_start() {
    let transport = ScriptedTransport::new();
    transport.reply(200, fixture("analyze-ready.json"));
    let client = client_with(&transport);

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client
        .analyze_with_cancel("ssllabs.com", true, &[], &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, LabsError::Cancelled));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_while_waiting() {
    let transport = ScriptedTransport::new();
    for _ in 0..5 {
        transport.reply(200, fixture("analyze-in-progress.json"));
    }
    let client = client_with(&transport);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        trigger.cancel();
    });

    let err = client
        .analyze_with_cancel("ssllabs.com", false, &[], &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, LabsError::Cancelled));
    // polls at t=0 and t=2, cancelled during the second pause
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_overrides_merge_and_delete() {
    let transport = ScriptedTransport::new();
    transport.reply(200, fixture("analyze-ready.json"));
    let client = client_with(&transport);

    let overrides = [
        Options::new().with("publish", "").with("maxAge", "1"),
        Options::new().with("maxAge", "12").with("all", "on"),
    ];
    client
        .analyze("ssllabs.com", false, &overrides)
        .await
        .unwrap();

    let (_, query) = transport.request(0);
    assert!(!query.contains_key("publish"));
    assert_eq!(query.get("maxAge").map(String::as_str), Some("12"));
    assert_eq!(query.get("all").map(String::as_str), Some("on"));
    assert_eq!(query.get("ignoreMismatch").map(String::as_str), Some("on"));
}
