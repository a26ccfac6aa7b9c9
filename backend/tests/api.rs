//! Integration tests for the Pi-hole Gate API.
//!
//! Each test spins up the full application on an ephemeral port, backed by
//! an in-memory SQLite database and a mock Pi-hole appliance, and drives it
//! over HTTP with reqwest.

use axum::{Json, Router, routing::post};
use backend::config::Config;
use backend::database::MIGRATOR;
use backend::services::pihole_service::PiholeService;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upstream call counters for the mock appliance.
#[derive(Default)]
struct MockPihole {
    auth_calls: AtomicUsize,
    history_calls: AtomicUsize,
    blocking_calls: AtomicUsize,
}

/// Spins up a mock Pi-hole admin API and returns its base URL.
async fn spawn_mock_pihole(counters: Arc<MockPihole>) -> String {
    let auth = counters.clone();
    let history = counters.clone();
    let blocking = counters.clone();

    let app = Router::new()
        .route(
            "/api/auth",
            post(move || {
                auth.auth_calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Json(serde_json::json!({
                        "session": { "valid": true, "sid": "mock-sid", "validity": 1800 }
                    }))
                }
            }),
        )
        .route(
            "/api/history",
            post(move || {
                history.history_calls.fetch_add(1, Ordering::SeqCst);
                async { Json(serde_json::json!({ "history": [] })) }
            }),
        )
        .route(
            "/api/dns/blocking",
            post(move || {
                blocking.blocking_calls.fetch_add(1, Ordering::SeqCst);
                async { Json(serde_json::json!({ "blocking": "disabled", "timer": 300 })) }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Spins up the application against the given appliance and returns its base URL.
async fn spawn_app(pihole_address: String) -> String {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_seconds: 3,
        server_port: 0,
        pihole_address,
        pihole_password: "test-password".to_string(),
        pihole_disable_seconds: 300,
    };

    // One connection so all queries see the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();

    let pihole = PiholeService::new(&config).unwrap();
    let app = backend::app(pool, pihole).await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn setup() -> (String, Arc<MockPihole>) {
    let counters = Arc::new(MockPihole::default());
    let pihole_url = spawn_mock_pihole(counters.clone()).await;
    let app_url = spawn_app(pihole_url).await;
    (app_url, counters)
}

async fn submit_url(client: &reqwest::Client, base: &str, url: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/pihole/temporary-disable", base))
        .json(&serde_json::json!({ "url": url }))
        .send()
        .await
        .unwrap()
}

async fn listed_urls(client: &reqwest::Client, base: &str, path: &str) -> Vec<serde_json::Value> {
    let body: serde_json::Value = client
        .get(format!("{}{}", base, path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["data"].as_array().unwrap().clone()
}

#[tokio::test]
async fn submit_creates_one_record_and_one_disable_call() {
    let (base, counters) = setup().await;
    let client = reqwest::Client::new();

    let response = submit_url(&client, &base, "https://example.com").await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["url"], "https://example.com");

    let urls = listed_urls(&client, &base, "/api/urls").await;
    assert_eq!(urls.len(), 1);
    assert_eq!(counters.blocking_calls.load(Ordering::SeqCst), 1);
    assert_eq!(counters.auth_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blocked_url_is_rejected_without_record_or_disable() {
    let (base, counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/blocked-urls", base))
        .json(&serde_json::json!({ "url": "https://ads.example" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = submit_url(&client, &base, "https://ads.example").await;
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "This URL is not permitted.");

    assert!(listed_urls(&client, &base, "/api/urls").await.is_empty());
    assert_eq!(counters.blocking_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn session_is_reused_across_submits() {
    let (base, counters) = setup().await;
    let client = reqwest::Client::new();

    assert_eq!(submit_url(&client, &base, "https://one.example").await.status(), 200);
    assert_eq!(submit_url(&client, &base, "https://two.example").await.status(), 200);

    // Second submit probes the cached sid instead of re-authenticating.
    assert_eq!(counters.auth_calls.load(Ordering::SeqCst), 1);
    assert_eq!(counters.history_calls.load(Ordering::SeqCst), 1);
    assert_eq!(counters.blocking_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_url_returns_field_errors() {
    let (base, counters) = setup().await;
    let client = reqwest::Client::new();

    let response = submit_url(&client, &base, "not a url").await;
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_type"], "validation_error");
    assert_eq!(body["error"]["details"][0]["field"], "url");

    assert!(listed_urls(&client, &base, "/api/urls").await.is_empty());
    assert_eq!(counters.blocking_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_url_field_returns_validation_envelope() {
    let (base, counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/pihole/temporary-disable", base))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_type"], "validation_error");

    let response = client
        .post(format!("{}/api/blocked-urls", base))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["error_type"], "validation_error");

    assert!(listed_urls(&client, &base, "/api/urls").await.is_empty());
    assert!(listed_urls(&client, &base, "/api/blocked-urls").await.is_empty());
    assert_eq!(counters.blocking_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_nonexistent_id_returns_404() {
    let (base, _counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/api/urls/no-such-id", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["error_type"], "not_found");
}

#[tokio::test]
async fn delete_removes_submitted_url() {
    let (base, _counters) = setup().await;
    let client = reqwest::Client::new();

    submit_url(&client, &base, "https://example.com").await;
    let urls = listed_urls(&client, &base, "/api/urls").await;
    let id = urls[0]["id"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{}/api/urls/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(listed_urls(&client, &base, "/api/urls").await.is_empty());
}

#[tokio::test]
async fn duplicate_blocked_url_returns_422() {
    let (base, _counters) = setup().await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{}/api/blocked-urls", base))
        .json(&serde_json::json!({ "url": "https://ads.example" }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = client
        .post(format!("{}/api/blocked-urls", base))
        .json(&serde_json::json!({ "url": "https://ads.example" }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 422);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["error"]["error_type"], "already_exists");

    assert_eq!(listed_urls(&client, &base, "/api/blocked-urls").await.len(), 1);
}

#[tokio::test]
async fn unreachable_appliance_keeps_record_and_returns_500() {
    // No mock appliance at all; the disable call fails downstream.
    let base = spawn_app("http://127.0.0.1:1".to_string()).await;
    let client = reqwest::Client::new();

    let response = submit_url(&client, &base, "https://example.com").await;
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["error_type"], "external_service_error");

    // The submission itself is kept; only the upstream action failed.
    assert_eq!(listed_urls(&client, &base, "/api/urls").await.len(), 1);
}
