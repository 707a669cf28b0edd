// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::extractors::document::{attr_matches, select};
use crate::extractors::patterns::{
    CONTENT_CONTAINER_PATTERN, IMAGE_ALT_PATTERN, IMAGE_CLASS_PATTERNS, IMAGE_SRC_PATTERN,
};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use crate::utils::media::{extract_image_format, is_valid_image_url};
use crate::utils::url_utils::resolve_url;
use anyhow::Result;
use async_trait::async_trait;
use scraper::ElementRef;
use serde_json::{json, Value};
use std::collections::HashSet;

/// 图片提取器
///
/// 按四组启发式规则收集产品图片：class属性、alt属性、
/// src路径以及主要内容容器内的图片
pub struct ImagesExtractor;

#[async_trait]
impl Extractor for ImagesExtractor {
    fn name(&self) -> &'static str {
        "images"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        Ok(extract_images(page))
    }
}

fn extract_images(page: &PageSnapshot) -> Value {
    let document = page.document();
    let all_images = select(&document, "img");
    let mut candidates: Vec<ElementRef> = Vec::new();

    // Pattern 1: CSS class patterns
    for pattern in IMAGE_CLASS_PATTERNS.iter() {
        candidates.extend(
            all_images
                .iter()
                .filter(|img| attr_matches(img, "class", pattern))
                .copied(),
        );
    }

    // Pattern 2: Alt text patterns
    candidates.extend(
        all_images
            .iter()
            .filter(|img| attr_matches(img, "alt", &IMAGE_ALT_PATTERN))
            .copied(),
    );

    // Pattern 3: URL patterns
    candidates.extend(
        all_images
            .iter()
            .filter(|img| attr_matches(img, "src", &IMAGE_SRC_PATTERN))
            .copied(),
    );

    // Pattern 4: All images in main content areas
    for container in select(&document, "main, article, section") {
        if attr_matches(&container, "class", &CONTENT_CONTAINER_PATTERN) {
            candidates.extend(select_images_within(&container));
        }
    }

    let mut seen_urls = HashSet::new();
    let mut images = Vec::new();

    for img in candidates {
        let src = img.value().attr("src").unwrap_or("");
        if src.is_empty() {
            continue;
        }

        let Ok(img_url) = resolve_url(&page.url, src) else {
            continue;
        };
        let img_url = img_url.to_string();

        if !seen_urls.insert(img_url.clone()) || !is_valid_image_url(&img_url) {
            continue;
        }

        let mut entry = json!({
            "url": img_url,
            "alt_text": img.value().attr("alt").unwrap_or(""),
            "format": extract_image_format(&img_url),
            "page_url": page.url.as_str(),
            "file_size": "Unknown",
        });

        // Dimensions only when both attributes parse as integers
        let width = img.value().attr("width").and_then(|w| w.parse::<u32>().ok());
        let height = img
            .value()
            .attr("height")
            .and_then(|h| h.parse::<u32>().ok());
        if let (Some(width), Some(height)) = (width, height) {
            entry["dimensions"] = json!({ "width": width, "height": height });
        }

        images.push(entry);
    }

    Value::Array(images)
}

fn select_images_within<'a>(container: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    match scraper::Selector::parse("img") {
        Ok(selector) => container.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}
