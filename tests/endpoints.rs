//! End-to-end tests for the service endpoints.

use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_home_returns_greeting() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"message": "Hello, World!"}));
}

#[tokio::test]
async fn test_data_echoes_object() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "test",
        "values": [1, 2, 3],
        "nested": {"ok": true, "none": null}
    });

    let res = client
        .post(format!("http://{}/data", addr))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["processed"], json!(true));
    assert_eq!(body["data"], payload); // Echoed verbatim, structurally equal
}

#[tokio::test]
async fn test_data_accepts_empty_object() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{}/data", addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"processed": true, "data": {}}));
}

#[tokio::test]
async fn test_data_rejects_non_object_values() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    for payload in [json!([1, 2, 3]), json!("text"), json!(42), json!(true), json!(null)] {
        let res = client
            .post(format!("http://{}/data", addr))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 400, "payload {} should be rejected", payload);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid data format"}));
    }
}

#[tokio::test]
async fn test_data_rejects_unparseable_body() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("http://{}/data", addr))
        .header(CONTENT_TYPE, "application/json")
        .body("{invalid")
        .send()
        .await
        .unwrap();

    // Same response as the non-object case
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid data format"}));
}

#[tokio::test]
async fn test_data_post_is_idempotent() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let payload = json!({"counter": 1});
    for _ in 0..3 {
        let res = client
            .post(format!("http://{}/data", addr))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"processed": true, "data": {"counter": 1}}));
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (addr, _shutdown) = common::spawn_service().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/missing", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let (addr, shutdown) = common::spawn_service().await;
    // Non-pooled client so the second request opens a fresh connection
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let result = client
        .get(format!("http://{}/", addr))
        .send()
        .await;
    assert!(result.is_err(), "server should refuse connections after shutdown");
}
