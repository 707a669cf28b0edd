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

use crate::extractors::document::{find_text, select, select_first, text_nodes};
use crate::extractors::patterns::{COOKIE_PATTERN, ISO_PATTERN, SKIP_NAV_PATTERN};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// 合规与无障碍信息提取器
pub struct ComplianceExtractor;

#[async_trait]
impl Extractor for ComplianceExtractor {
    fn name(&self) -> &'static str {
        "compliance"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();

        let images = select(&document, "img");
        let accessibility = json!({
            "images_with_alt": images
                .iter()
                .filter(|img| img.value().attr("alt").is_some())
                .count(),
            "images_total": images.len(),
            "forms_with_labels": select(&document, "label").len(),
            "lang_attribute": select_first(&document, "html[lang]").is_some(),
            "skip_navigation": find_text(&document, &SKIP_NAV_PATTERN).is_some(),
        });

        let cookie_notice = find_text(&document, &COOKIE_PATTERN).is_some();

        // ISO certifications, deduplicated keeping document order
        let mut iso_certifications: Vec<String> = Vec::new();
        'outer: for (text, _) in text_nodes(&document) {
            for m in ISO_PATTERN.find_iter(text) {
                let code = m.as_str().to_string();
                if !iso_certifications.contains(&code) {
                    iso_certifications.push(code);
                }
                if iso_certifications.len() == 5 {
                    break 'outer;
                }
            }
        }

        Ok(json!({
            "page_url": page.url.as_str(),
            "accessibility": accessibility,
            "cookie_notice": cookie_notice,
            "iso_certifications": iso_certifications,
        }))
    }
}
