// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_page, real_service};
use serde_json::{json, Value};
use sitescan::presentation::routes;
use tokio::net::TcpListener;
use wiremock::MockServer;

/// 在随机端口启动应用并返回基础URL
async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::routes(real_service());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_and_version_endpoints() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let health = client.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");

    let version = client
        .get(format!("{}/v1/version", base))
        .send()
        .await
        .unwrap();
    assert_eq!(version.status(), 200);
}

#[tokio::test]
async fn test_crawl_endpoint_returns_report() {
    let site = MockServer::start().await;
    mount_page(
        &site,
        "/",
        r#"<html><head><title>API Test</title></head><body>
            <img src="/p1.jpg" class="product" alt="p1">
        </body></html>"#,
    )
    .await;

    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/crawl", base))
        .json(&json!({ "url": site.uri(), "modes": ["images", "meta"], "depth": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let report: Value = response.json().await.unwrap();
    assert_eq!(report["pages_crawled"], 1);
    assert_eq!(report["images"].as_array().unwrap().len(), 1);
    assert_eq!(report["meta"][0]["title"], "API Test");
}

#[tokio::test]
async fn test_crawl_endpoint_rejects_invalid_url() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/crawl", base))
        .json(&json!({ "url": "not-a-url", "modes": ["images"] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("url"));
}

#[tokio::test]
async fn test_crawl_endpoint_rejects_empty_modes() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/crawl", base))
        .json(&json!({ "url": "https://example.com", "modes": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_crawl_endpoint_ignores_unknown_modes() {
    let site = MockServer::start().await;
    mount_page(&site, "/", r#"<html><head><title>T</title></head></html>"#).await;

    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/v1/crawl", base))
        .json(&json!({ "url": site.uri(), "modes": ["meta", "bogus"], "depth": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let report: Value = response.json().await.unwrap();
    assert_eq!(report["pages_crawled"], 1);
    assert!(report.get("bogus").is_none());
}
