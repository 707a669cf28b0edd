// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use sitescan::extractors::{Extractor, ExtractorContext, PageSnapshot};
use url::Url;

pub fn page(html: &str) -> PageSnapshot {
    PageSnapshot {
        url: Url::parse("https://example.com/").unwrap(),
        html: html.to_string(),
    }
}

/// 在默认上下文中运行提取器
pub async fn run(extractor: &dyn Extractor, html: &str) -> Value {
    extractor
        .extract(&page(html), &ExtractorContext::default())
        .await
        .expect("extractor should not fail")
}
