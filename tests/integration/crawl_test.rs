// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_page, real_service};
use serde_json::json;
use sitescan::domain::models::crawl::CrawlRequest;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(url: String, modes: &[&str], depth: u32, max_pages: usize) -> CrawlRequest {
    CrawlRequest {
        url,
        modes: modes.iter().map(|m| m.to_string()).collect(),
        max_depth: depth,
        max_pages,
    }
}

#[tokio::test]
async fn test_depth_zero_images_scenario() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
            <img src="/p1.jpg" class="product-image" alt="Product 1">
            <img src="/p2.png" class="item-photo">
            <img src="/logo.png" class="site-logo">
            <a href="/next">next</a>
        </body></html>"#,
    )
    .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["images"], 0, 50))
        .await
        .unwrap();

    assert_eq!(report.pages_crawled, 1);
    let images = report.data["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["format"], "jpeg");
    assert_eq!(images[1]["format"], "png");
    assert!(images
        .iter()
        .all(|img| !img["url"].as_str().unwrap().contains("logo")));
}

#[tokio::test]
async fn test_404_seed_produces_empty_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["images", "seo"], 1, 50))
        .await
        .unwrap();

    assert_eq!(report.pages_crawled, 0);
    assert_eq!(report.data["images"], json!([]));
    assert_eq!(report.data["seo"], json!({}));
}

#[tokio::test]
async fn test_depth_one_follows_links_and_merges() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <img src="/shared.jpg" class="product" alt="shared">
            <a href="/child">child</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/child",
        r#"<html><head><title>Child</title></head><body>
            <img src="/shared.jpg" class="product" alt="shared">
            <img src="/extra.png" class="product" alt="extra">
        </body></html>"#,
    )
    .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["images", "meta"], 1, 50))
        .await
        .unwrap();

    assert_eq!(report.pages_crawled, 2);

    // Shared image appears once after finalization
    let images = report.data["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);

    // Sequence modes keep one item per page
    let meta = report.data["meta"].as_array().unwrap();
    assert_eq!(meta.len(), 2);
}

#[tokio::test]
async fn test_mapping_mode_later_page_overwrites() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
            <footer>© 2024 First Corp. All rights reserved</footer>
            <a href="/about">about</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/about",
        r#"<html><body>
            <footer>© 2025 Second Corp. All rights reserved</footer>
        </body></html>"#,
    )
    .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["brand"], 1, 50))
        .await
        .unwrap();

    // Visit order is seed then child, so the child's value wins
    assert_eq!(report.data["brand"]["company_name"], json!("Second Corp"));
}

#[tokio::test]
async fn test_security_and_infrastructure_read_real_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Frame-Options", "SAMEORIGIN")
                .insert_header("Server", "nginx")
                .insert_header("cf-ray", "abc123")
                .set_body_string("<html><body>secure</body></html>"),
        )
        .mount(&server)
        .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["security", "infrastructure"], 0, 50))
        .await
        .unwrap();

    let security = &report.data["security"];
    // The mock server speaks plain http
    assert_eq!(security["https"], json!(false));
    assert_eq!(security["headers"]["X-Frame-Options"]["present"], json!(true));
    assert_eq!(security["headers"]["HSTS"]["present"], json!(false));

    let infrastructure = &report.data["infrastructure"];
    assert_eq!(infrastructure["server"], json!("nginx"));
    assert_eq!(infrastructure["cdn"], json!("Cloudflare"));
}

#[tokio::test]
async fn test_performance_mode_refetches_and_reports() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><head>
            <link rel="preconnect" href="https://fonts.example">
            <link rel="preload" href="/app.js" as="script">
        </head><body>perf</body></html>"#,
    )
    .await;

    let report = real_service()
        .crawl(&request(server.uri(), &["performance"], 0, 50))
        .await
        .unwrap();

    let performance = &report.data["performance"];
    assert_eq!(performance["status_code"], json!(200));
    assert!(performance["load_time"].as_str().unwrap().ends_with('s'));
    assert!(performance["page_size"].as_str().unwrap().ends_with('B'));
    assert_eq!(performance["resource_hints"]["preconnect"], json!(1));
    assert_eq!(performance["resource_hints"]["preload"], json!(1));
    assert_eq!(performance["resource_hints"]["prefetch"], json!(0));
}

#[tokio::test]
async fn test_links_per_page_cap_limits_fanout() {
    let server = MockServer::start().await;
    let links: String = (0..15)
        .map(|i| format!(r#"<a href="/page{}">p{}</a>"#, i, i))
        .collect();
    mount_page(&server, "/", &format!("<html><body>{}</body></html>", links)).await;
    for i in 0..15 {
        mount_page(&server, &format!("/page{}", i), "<html><body>leaf</body></html>").await;
    }

    let report = real_service()
        .crawl(&request(server.uri(), &["meta"], 1, 500))
        .await
        .unwrap();

    // Seed plus at most the first 10 discovered links
    assert_eq!(report.pages_crawled, 11);
}
