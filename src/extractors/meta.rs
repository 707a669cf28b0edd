// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::extractors::document::{element_text, select, select_first};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// 元数据提取器
///
/// 提取标题、描述、H1标题和Open Graph数据
pub struct MetadataExtractor;

#[async_trait]
impl Extractor for MetadataExtractor {
    fn name(&self) -> &'static str {
        "meta"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();

        let title = select_first(&document, "title")
            .map(|t| element_text(&t))
            .unwrap_or_default();

        let description = select_first(&document, r#"meta[name="description"]"#)
            .and_then(|m| m.value().attr("content").map(str::to_string))
            .unwrap_or_default();

        let h1: Vec<String> = select(&document, "h1")
            .iter()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect();

        let og_content = |property: &str| -> String {
            select_first(&document, &format!(r#"meta[property="{}"]"#, property))
                .and_then(|m| m.value().attr("content").map(str::to_string))
                .unwrap_or_default()
        };

        Ok(json!([{
            "page_url": page.url.as_str(),
            "title": title,
            "description": description,
            "h1": h1,
            "og_data": {
                "title": og_content("og:title"),
                "description": og_content("og:description"),
                "image": og_content("og:image"),
            },
        }]))
    }
}
