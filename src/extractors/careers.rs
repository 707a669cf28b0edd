// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::extractors::document::{attr_matches, element_text, select};
use crate::extractors::patterns::CAREER_LINK_PATTERN;
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use crate::utils::url_utils::resolve_url;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// 招聘信息提取器
///
/// 提取招聘相关链接和JobPosting结构化数据
pub struct CareersExtractor;

#[async_trait]
impl Extractor for CareersExtractor {
    fn name(&self) -> &'static str {
        "careers"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut careers = Vec::new();

        for link in select(&document, "a[href]")
            .iter()
            .filter(|a| attr_matches(a, "href", &CAREER_LINK_PATTERN))
            .take(5)
        {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Ok(url) = resolve_url(&page.url, href) else {
                continue;
            };
            careers.push(json!({
                "text": element_text(link),
                "url": url.as_str(),
            }));
        }

        // Structured job postings from ld+json scripts
        for script in select(&document, r#"script[type="application/ld+json"]"#) {
            let raw = script.text().collect::<String>();
            let Ok(data) = serde_json::from_str::<Value>(&raw) else {
                continue;
            };
            if data.get("@type").and_then(Value::as_str) == Some("JobPosting") {
                careers.push(json!({
                    "type": "structured_job_posting",
                    "title": data.get("title").and_then(Value::as_str).unwrap_or(""),
                    "company": data
                        .pointer("/hiringOrganization/name")
                        .and_then(Value::as_str)
                        .unwrap_or(""),
                }));
            }
        }

        Ok(Value::Array(careers))
    }
}
