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

use crate::extractors::document::{
    find_text, matched_link_urls, text_match_count, truncate_chars,
};
use crate::extractors::patterns::{
    COPYRIGHT_PATTERN, DPO_KEYWORDS, KVKK_PATTERN, PRIVACY_LINK_PATTERN, TERMS_LINK_PATTERN,
};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use serde_json::{json, Map, Value};

/// 法务信息提取器
///
/// 提取隐私政策、服务条款链接、KVKK提及和版权声明
pub struct LegalExtractor;

#[async_trait]
impl Extractor for LegalExtractor {
    fn name(&self) -> &'static str {
        "legal"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut legal = Map::new();
        legal.insert("page_url".into(), json!(page.url.as_str()));

        legal.insert(
            "privacy_policy_urls".into(),
            json!(matched_link_urls(&document, &page.url, &PRIVACY_LINK_PATTERN, 3)),
        );
        legal.insert(
            "terms_urls".into(),
            json!(matched_link_urls(&document, &page.url, &TERMS_LINK_PATTERN, 3)),
        );

        let kvkk_mentions = text_match_count(&document, &KVKK_PATTERN);
        legal.insert(
            "kvkk_compliance".into(),
            json!({
                "mentioned": kvkk_mentions > 0,
                "mention_count": kvkk_mentions,
            }),
        );

        let dpo_found = DPO_KEYWORDS.iter().any(|keyword| {
            Regex::new(&format!("(?i){}", regex::escape(keyword)))
                .map(|pattern| find_text(&document, &pattern).is_some())
                .unwrap_or(false)
        });
        legal.insert("data_protection_officer".into(), json!(dpo_found));

        if let Some(text) = find_text(&document, &COPYRIGHT_PATTERN) {
            legal.insert("copyright".into(), json!(truncate_chars(text.trim(), 100)));
        }

        Ok(Value::Object(legal))
    }
}
