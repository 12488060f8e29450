//! End-to-end tests — a real server on an OS-assigned port, driven over HTTP.

use ctx_protocol::{Attributes, REQUEST_ID_HEADER};
use ctx_server::{HttpServer, ServerConfig};
use ctx_store::global;
use serde_json::Value;

/// Start a server on a random port. The server is leaked so it keeps running
/// for the rest of the test binary.
async fn start_test_server() -> String {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let server = HttpServer::start(config).await.unwrap();
    let base_url = server.base_url();
    Box::leak(Box::new(server));
    base_url
}

async fn get_text(url: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn alice_is_greeted_by_path() {
    let base = start_test_server().await;
    let (status, body) = get_text(&format!("{base}/Alice")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Hello, Alice");
}

#[tokio::test]
async fn memo_route_greets_john() {
    let base = start_test_server().await;
    let (_, body) = get_text(&format!("{base}/memo/Alice")).await;
    assert_eq!(body, "Hello, John");
}

#[tokio::test]
async fn concurrent_requests_get_distinct_scopes() {
    let base = start_test_server().await;
    let url = format!("{base}/memo/x");

    let (a, b) = tokio::join!(reqwest::get(&url), reqwest::get(&url));
    let a = a.unwrap();
    let b = b.unwrap();
    let a_id = a.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    let b_id = b.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    assert_ne!(a_id, b_id);
    assert_eq!(a.text().await.unwrap(), "Hello, John");
    assert_eq!(b.text().await.unwrap(), "Hello, John");
}

#[tokio::test]
async fn global_route_leaves_no_user_behind() {
    let base = start_test_server().await;
    let (_, body) = get_text(&format!("{base}/global")).await;
    assert_eq!(body, "Hello, Tony");
    assert!(!global::contains(Attributes::USER));
}

#[tokio::test]
async fn explicit_route_greets_path_user() {
    let base = start_test_server().await;
    let (_, body) = get_text(&format!("{base}/explicit/Tony")).await;
    assert_eq!(body, "Hello, Tony");
}

#[tokio::test]
async fn health_reports_ok() {
    let base = start_test_server().await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["requests"], 1);
}

#[tokio::test]
async fn server_stops_cleanly() {
    let mut server = HttpServer::start(ServerConfig {
        port: 0,
        ..ServerConfig::default()
    })
    .await
    .unwrap();
    let url = format!("{}/Bob", server.base_url());
    assert_eq!(get_text(&url).await.1, "Hello, Bob");
    assert_eq!(server.requests_served(), 1);

    server.stop().await;
    assert!(reqwest::get(&url).await.is_err());
}

#[tokio::test]
async fn cors_enabled_allows_any_origin() {
    let server = HttpServer::start(ServerConfig {
        port: 0,
        enable_cors: true,
        ..ServerConfig::default()
    })
    .await
    .unwrap();

    let response = reqwest::Client::new()
        .get(format!("{}/Alice", server.base_url()))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "Hello, Alice");
}

#[tokio::test]
async fn cors_disabled_sends_no_allow_origin() {
    let base = start_test_server().await;
    let response = reqwest::Client::new()
        .get(format!("{base}/Alice"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert!(!response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn binds_by_hostname() {
    let server = HttpServer::start(ServerConfig {
        port: 0,
        hostname: "localhost".into(),
        ..ServerConfig::default()
    })
    .await
    .unwrap();
    assert_ne!(server.port(), 0);

    let (_, body) = get_text(&format!("{}/Alice", server.base_url())).await;
    assert_eq!(body, "Hello, Alice");
}
