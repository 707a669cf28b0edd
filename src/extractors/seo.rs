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

use crate::extractors::document::{element_text, select, select_first};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use scraper::Html;
use serde_json::{json, Map, Value};

/// SEO分析提取器
///
/// 对标题、描述、标题层级、图片alt覆盖率、结构化数据、
/// Open Graph与Twitter Card等做综合分析
pub struct SeoExtractor;

#[async_trait]
impl Extractor for SeoExtractor {
    fn name(&self) -> &'static str {
        "seo"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut seo = Map::new();
        seo.insert("page_url".into(), json!(page.url.as_str()));

        // Title analysis
        let title = select_first(&document, "title")
            .map(|t| element_text(&t))
            .unwrap_or_default();
        let title_len = title.chars().count();
        seo.insert(
            "title".into(),
            json!({
                "content": title,
                "length": title_len,
                "optimal": (30..=60).contains(&title_len),
            }),
        );

        // Meta description analysis
        let description = meta_content(&document, r#"meta[name="description"]"#);
        let description_len = description.chars().count();
        seo.insert(
            "meta_description".into(),
            json!({
                "content": description,
                "length": description_len,
                "optimal": (120..=160).contains(&description_len),
            }),
        );

        seo.insert(
            "meta_keywords".into(),
            json!(meta_content(&document, r#"meta[name="keywords"]"#)),
        );

        // Headings structure
        let heading_texts = |tag: &str, limit: usize| -> Vec<String> {
            select(&document, tag)
                .iter()
                .take(limit)
                .map(element_text)
                .collect()
        };
        seo.insert(
            "headings".into(),
            json!({
                "h1": heading_texts("h1", usize::MAX),
                "h2": heading_texts("h2", 5),
                "h3": heading_texts("h3", 5),
            }),
        );

        // Images analysis
        let images = select(&document, "img");
        let total = images.len();
        let without_alt = images
            .iter()
            .filter(|img| img.value().attr("alt").unwrap_or("").is_empty())
            .count();
        let alt_coverage = if total > 0 {
            json!(format!(
                "{:.1}%",
                (total - without_alt) as f64 / total as f64 * 100.0
            ))
        } else {
            json!("N/A")
        };
        seo.insert(
            "images".into(),
            json!({
                "total": total,
                "without_alt": without_alt,
                "alt_coverage": alt_coverage,
            }),
        );

        // Structured data
        let schema_count = select(&document, r#"script[type="application/ld+json"]"#).len();
        seo.insert(
            "structured_data".into(),
            json!({ "found": schema_count > 0, "count": schema_count }),
        );

        seo.insert(
            "canonical_url".into(),
            json!(select_first(&document, r#"link[rel="canonical"]"#)
                .and_then(|l| l.value().attr("href").map(str::to_string))
                .unwrap_or_default()),
        );

        seo.insert(
            "robots".into(),
            json!(meta_content(&document, r#"meta[name="robots"]"#)),
        );

        // Open Graph and Twitter Card tags
        seo.insert(
            "open_graph".into(),
            tag_table(&document, r#"meta[property^="og:"]"#, "property"),
        );
        seo.insert(
            "twitter_card".into(),
            tag_table(&document, r#"meta[name^="twitter:"]"#, "name"),
        );

        // Language and mobile
        seo.insert(
            "language".into(),
            json!(select_first(&document, "html")
                .and_then(|h| h.value().attr("lang").map(str::to_string))
                .unwrap_or_default()),
        );

        let viewport = select_first(&document, r#"meta[name="viewport"]"#);
        seo.insert(
            "mobile_friendly".into(),
            json!({
                "viewport_tag": viewport
                    .and_then(|v| v.value().attr("content").map(str::to_string))
                    .unwrap_or_default(),
                "has_viewport": viewport.is_some(),
            }),
        );

        Ok(Value::Object(seo))
    }
}

fn meta_content(document: &Html, css: &str) -> String {
    select_first(document, css)
        .and_then(|m| m.value().attr("content").map(str::to_string))
        .unwrap_or_default()
}

/// 收集前10个标签的键值对
fn tag_table(document: &Html, css: &str, key_attr: &str) -> Value {
    let tags = select(document, css);
    let mut table = Map::new();
    for tag in tags.iter().take(10) {
        let key = tag.value().attr(key_attr).unwrap_or("").to_string();
        let content = tag.value().attr("content").unwrap_or("").to_string();
        table.insert(key, json!(content));
    }
    json!({ "found": !tags.is_empty(), "tags": table })
}
