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
    attr_matches, element_text, matched_link_urls, select, text_nodes,
};
use crate::extractors::patterns::{
    ADDRESS_KEYWORDS, CONTACT_LINK_PATTERN, EMAIL_PATTERN, PHONE_PATTERNS, SOCIAL_PATTERNS,
};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use scraper::Html;
use serde_json::{json, Map, Value};

/// 联系方式提取器
///
/// 提取电子邮件、电话号码、社交媒体链接、地址和联系页面链接
pub struct ContactExtractor;

#[async_trait]
impl Extractor for ContactExtractor {
    fn name(&self) -> &'static str {
        "contact"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut contact = Map::new();
        contact.insert("page_url".into(), json!(page.url.as_str()));

        let texts: Vec<&str> = text_nodes(&document)
            .iter()
            .map(|(text, _)| text.trim())
            .filter(|text| !text.is_empty())
            .collect();

        // Emails, deduplicated keeping document order
        let mut emails: Vec<String> = Vec::new();
        for text in &texts {
            for m in EMAIL_PATTERN.find_iter(text) {
                let email = m.as_str().to_string();
                if !emails.contains(&email) {
                    emails.push(email);
                }
            }
        }
        emails.truncate(5);
        contact.insert("emails".into(), json!(emails));

        // Phone numbers, deduplicated keeping document order
        let mut phones: Vec<String> = Vec::new();
        for text in &texts {
            for pattern in PHONE_PATTERNS.iter() {
                for m in pattern.find_iter(text) {
                    let phone = m.as_str().to_string();
                    if !phones.contains(&phone) {
                        phones.push(phone);
                    }
                }
            }
        }
        phones.truncate(5);
        contact.insert("phones".into(), json!(phones));

        // Social media profiles, first match per platform
        let links = select(&document, "a[href]");
        let mut social = Map::new();
        for (platform, pattern) in SOCIAL_PATTERNS.iter() {
            let matched = links
                .iter()
                .find(|a| attr_matches(a, "href", pattern))
                .and_then(|a| a.value().attr("href"));
            if let Some(href) = matched {
                social.insert((*platform).to_string(), json!(href));
            }
        }
        contact.insert("social_media".into(), Value::Object(social));

        if let Some(address) = find_address(&document) {
            contact.insert("address".into(), json!(address));
        }

        contact.insert(
            "contact_page_urls".into(),
            json!(matched_link_urls(&document, &page.url, &CONTACT_LINK_PATTERN, 3)),
        );

        Ok(Value::Object(contact))
    }
}

/// 在地址关键词附近查找长度合适的文本块
fn find_address(document: &Html) -> Option<String> {
    for keyword in ADDRESS_KEYWORDS {
        let pattern = Regex::new(&format!("(?i){}", regex::escape(keyword))).ok()?;
        for (text, parent) in text_nodes(document) {
            if !pattern.is_match(text) {
                continue;
            }
            let Some(parent) = parent else { continue };
            let block = element_text(&parent);
            let len = block.chars().count();
            if len > 20 && len < 300 {
                return Some(block);
            }
        }
    }
    None
}
