//! Integration tests for the endpoint probe battery.

mod common;

use common::*;
use serde_json::json;
use stockdeck::app::{AppMessage, NoticeLevel, Screen};
use stockdeck::view_model::{run_battery, ResultShape, ViewLifetime, PROBES};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_mixed_battery(backend: &TestBackend) {
    mount_status(&backend.server, "/api/products", 200, json!([{"id": 1}, {"id": 2}])).await;
    mount_status(&backend.server, "/api/suppliers", 404, json!({"error": "Not found"})).await;
    mount_status(&backend.server, "/api/orders", 200, json!({"data": [], "total": 0})).await;
    mount_status(&backend.server, "/api/reports/alerts", 500, json!({"message": "boom"})).await;
}

#[tokio::test]
async fn test_battery_counts_match_statuses() {
    let backend = TestBackend::start().await;
    mount_mixed_battery(&backend).await;
    let api = backend.signed_in_client().await;

    let mut lifetime = ViewLifetime::new();
    let activation = lifetime.activate();
    let summary = run_battery(&api, &PROBES, &activation, |_| {}).await;

    assert_eq!(summary.passed + summary.failed, PROBES.len());
    assert_eq!(summary.passed, 2);
    assert!(!summary.all_passed());

    for (result, probe) in summary.results.iter().zip(PROBES.iter()) {
        assert_eq!(result.path, probe.path);
        let status = result.status.expect("every probe got an answer");
        assert_eq!(result.success, (200..300).contains(&status), "{}", probe.path);
        assert_eq!(result.error.is_some(), !result.success);
    }

    assert_eq!(summary.results[0].shape, Some(ResultShape::Array { len: 2 }));
    assert_eq!(
        summary.results[2].shape,
        Some(ResultShape::Object {
            keys: vec!["data".to_string(), "total".to_string()]
        })
    );
    assert_eq!(summary.results[3].error.as_deref(), Some("boom"));
}

#[tokio::test]
async fn test_probes_send_the_bearer_token() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend.server)
        .await;
    let api = backend.signed_in_client().await;

    let mut lifetime = ViewLifetime::new();
    let activation = lifetime.activate();
    run_battery(&api, &PROBES[..1], &activation, |_| {}).await;

    let requests = backend.server.received_requests().await.unwrap_or_default();
    let auth = requests[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(auth, Some(format!("Bearer {}", TEST_TOKEN)));
}

#[tokio::test]
async fn test_debug_screen_streams_results_and_summarises() {
    let backend = TestBackend::start().await;
    mount_mixed_battery(&backend).await;
    let api = backend.signed_in_client().await;
    let (mut app, mut rx) = test_app(api);

    app.open_debug();
    assert_eq!(app.screen, Screen::Debug);
    assert!(app.debug.running);
    assert_eq!(app.debug.pending(), PROBES.len());

    let mut per_probe = 0;
    loop {
        let msg = next_message(&mut rx).await;
        let done = matches!(msg, AppMessage::BatteryFinished { .. });
        if matches!(msg, AppMessage::ProbeFinished { .. }) {
            per_probe += 1;
        }
        app.handle_message(msg);
        if done {
            break;
        }
    }

    assert_eq!(per_probe, PROBES.len());
    assert!(!app.debug.running);
    let summary = app.debug.summary.as_ref().expect("summary");
    assert_eq!(summary.total(), PROBES.len());
    assert_eq!(app.debug.results.len(), PROBES.len());

    let notice = app.notice.as_ref().expect("summary notice");
    assert_eq!(notice.text, "2/4 probes passed");
    assert_eq!(notice.level, NoticeLevel::Error);

    // A 401-free battery never touches the session
    assert!(app.session().is_authenticated());
}

#[tokio::test]
async fn test_unauthorized_probe_keeps_session() {
    let backend = TestBackend::start().await;
    for probe in PROBES {
        mount_status(
            &backend.server,
            &format!("/api{}", probe.path),
            401,
            json!({"error": "jwt expired"}),
        )
        .await;
    }
    let api = backend.signed_in_client().await;
    let (mut app, mut rx) = test_app(api);

    app.open_debug();
    pump_until(&mut app, &mut rx, |app| !app.debug.running).await;

    assert_eq!(app.screen, Screen::Debug);
    assert!(app.session().is_authenticated());
    assert_eq!(app.debug.summary.as_ref().map(|s| s.failed), Some(PROBES.len()));
}

#[tokio::test]
async fn test_leaving_debug_cancels_battery() {
    let backend = TestBackend::start().await;
    mount_mixed_battery(&backend).await;
    let api = backend.signed_in_client().await;
    let (mut app, mut rx) = test_app(api);

    app.open_debug();
    app.go_back();
    assert_eq!(app.screen, Screen::Orders);
    assert!(!app.debug.running);

    pump_until(&mut app, &mut rx, |app| app.orders.state.is_success()).await;
    // Late probe messages are rejected by the cancelled activation
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    assert!(app.debug.results.is_empty());
    assert!(app.debug.summary.is_none());
}
