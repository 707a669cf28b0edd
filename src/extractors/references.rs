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

use crate::extractors::document::{attr_matches, element_text, select, truncate_chars};
use crate::extractors::patterns::{REFERENCE_KEYWORDS, TESTIMONIAL_PATTERN};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use crate::utils::url_utils::resolve_url;
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use scraper::ElementRef;
use serde_json::{json, Value};

/// 客户案例提取器
///
/// 在关键词标记的区块中查找客户Logo和推荐语
pub struct ReferencesExtractor;

#[async_trait]
impl Extractor for ReferencesExtractor {
    fn name(&self) -> &'static str {
        "references"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut references = Vec::new();

        for keyword in REFERENCE_KEYWORDS {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(keyword)))?;

            // Sections tagged by class, then by id
            let blocks = select(&document, "section, div");
            let mut sections: Vec<ElementRef> = blocks
                .iter()
                .filter(|b| attr_matches(b, "class", &pattern))
                .copied()
                .collect();
            sections.extend(
                blocks
                    .iter()
                    .filter(|b| attr_matches(b, "id", &pattern))
                    .copied(),
            );

            for section in sections.iter().take(3) {
                for logo in select_within(section, "img").iter().take(10) {
                    let name = logo
                        .value()
                        .attr("alt")
                        .filter(|a| !a.is_empty())
                        .or_else(|| logo.value().attr("title").filter(|t| !t.is_empty()));
                    let Some(name) = name else {
                        continue;
                    };
                    let image_url = logo
                        .value()
                        .attr("src")
                        .and_then(|src| resolve_url(&page.url, src).ok())
                        .map(|u| u.to_string())
                        .unwrap_or_default();
                    references.push(json!({
                        "type": "logo",
                        "name": name,
                        "image_url": image_url,
                    }));
                }

                for testimonial in select_within(section, "blockquote, p, div")
                    .iter()
                    .filter(|t| attr_matches(t, "class", &TESTIMONIAL_PATTERN))
                    .take(5)
                {
                    let text = element_text(testimonial);
                    if text.is_empty() {
                        continue;
                    }
                    references.push(json!({
                        "type": "testimonial",
                        "text": truncate_chars(&text, 200),
                        "full_text": text,
                    }));
                }
            }
        }

        Ok(Value::Array(references))
    }
}

fn select_within<'a>(element: &ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match scraper::Selector::parse(css) {
        Ok(selector) => element.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}
