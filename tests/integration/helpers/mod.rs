// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sitescan::config::settings::CrawlerSettings;
use sitescan::domain::services::crawler_service::CrawlerService;
use sitescan::engines::reqwest_engine::ReqwestEngine;
use sitescan::extractors::registry::ExtractorRegistry;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 不带限速延迟的测试配置
pub fn test_settings() -> CrawlerSettings {
    CrawlerSettings {
        crawl_delay_ms: 0,
        ..CrawlerSettings::default()
    }
}

/// 构建使用真实抓取引擎的爬虫服务
pub fn real_service() -> Arc<CrawlerService> {
    let settings = test_settings();
    let engine = Arc::new(ReqwestEngine::from_settings(&settings));
    let registry = Arc::new(ExtractorRegistry::new());
    Arc::new(CrawlerService::new(engine, registry, &settings))
}

/// 在模拟服务器上挂载一个HTML页面
pub async fn mount_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html.to_string()))
        .mount(server)
        .await;
}
