// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::page;
use serde_json::json;
use sitescan::extractors::infrastructure::InfrastructureExtractor;
use sitescan::extractors::performance::PerformanceExtractor;
use sitescan::extractors::security::SecurityExtractor;
use sitescan::extractors::{Extractor, ExtractorContext, ResponseMeta};

fn response_with(headers: &[(&str, &str)]) -> ResponseMeta {
    ResponseMeta {
        status_code: 200,
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[tokio::test]
async fn test_security_requires_response_context() {
    let result = SecurityExtractor
        .extract(&page("<html></html>"), &ExtractorContext::default())
        .await
        .unwrap();

    assert_eq!(result, json!({ "error": "HTTP response required" }));
}

#[tokio::test]
async fn test_infrastructure_requires_response_context() {
    let result = InfrastructureExtractor
        .extract(&page("<html></html>"), &ExtractorContext::default())
        .await
        .unwrap();

    assert_eq!(result, json!({ "error": "HTTP response required" }));
}

#[tokio::test]
async fn test_performance_requires_fetch_engine() {
    let result = PerformanceExtractor
        .extract(&page("<html></html>"), &ExtractorContext::default())
        .await
        .unwrap();

    assert_eq!(result, json!({ "error": "fetch engine required" }));
}

#[tokio::test]
async fn test_security_reports_header_presence() {
    let ctx = ExtractorContext {
        engine: None,
        response: Some(response_with(&[
            ("strict-transport-security", "max-age=63072000"),
            ("x-frame-options", "DENY"),
        ])),
    };

    let security = SecurityExtractor
        .extract(&page("<html></html>"), &ctx)
        .await
        .unwrap();

    assert_eq!(security["https"], true);
    assert_eq!(security["headers"]["HSTS"]["present"], true);
    assert_eq!(security["headers"]["HSTS"]["value"], "max-age=63072000");
    assert_eq!(security["headers"]["X-Frame-Options"]["value"], "DENY");
    assert_eq!(security["headers"]["CSP"]["present"], false);
    assert_eq!(security["headers"]["CSP"]["value"], "Not set");
    assert_eq!(security["ssl"]["enabled"], true);
}

#[tokio::test]
async fn test_security_long_header_value_truncated() {
    let long_value = "a".repeat(150);
    let ctx = ExtractorContext {
        engine: None,
        response: Some(response_with(&[("content-security-policy", &long_value)])),
    };

    let security = SecurityExtractor
        .extract(&page("<html></html>"), &ctx)
        .await
        .unwrap();

    assert_eq!(
        security["headers"]["CSP"]["value"].as_str().unwrap().len(),
        100
    );
}

#[tokio::test]
async fn test_infrastructure_server_and_cdn_detection() {
    let ctx = ExtractorContext {
        engine: None,
        response: Some(response_with(&[
            ("server", "nginx/1.25"),
            ("cf-ray", "8a1b2c3d"),
            ("x-cdn", "other"),
        ])),
    };

    let infrastructure = InfrastructureExtractor
        .extract(&page("<html></html>"), &ctx)
        .await
        .unwrap();

    assert_eq!(infrastructure["server"], "nginx/1.25");
    assert_eq!(infrastructure["powered_by"], "Not disclosed");
    // cf-ray outranks x-cdn in the detection table
    assert_eq!(infrastructure["cdn"], "Cloudflare");
}

#[tokio::test]
async fn test_infrastructure_without_cdn_headers() {
    let ctx = ExtractorContext {
        engine: None,
        response: Some(response_with(&[("server", "Apache")])),
    };

    let infrastructure = InfrastructureExtractor
        .extract(&page("<html></html>"), &ctx)
        .await
        .unwrap();

    assert!(infrastructure.get("cdn").is_none());
}
