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
    attr_matches, find_text, matched_link_urls, select, select_first,
};
use crate::extractors::patterns::{
    ABOUT_LINK_PATTERN, COPYRIGHT_COMPANY_PATTERN, LOGO_ATTR_PATTERN, LOGO_RULES, LogoRule,
    MISSION_KEYWORDS,
};
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use crate::utils::url_utils::resolve_url;
use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html};
use serde_json::{json, Map, Value};

/// 品牌信息提取器
///
/// 提取Logo、版权公司名、关于我们链接和使命/愿景关键词
pub struct BrandExtractor;

#[async_trait]
impl Extractor for BrandExtractor {
    fn name(&self) -> &'static str {
        "brand"
    }

    async fn extract(&self, page: &PageSnapshot, _ctx: &ExtractorContext) -> Result<Value> {
        let document = page.document();
        let mut brand = Map::new();
        brand.insert("page_url".into(), json!(page.url.as_str()));

        // Logo: first rule that yields an img with a src wins
        if let Some(logo) = find_logo(&document) {
            if let Some(src) = logo.value().attr("src") {
                if let Ok(logo_url) = resolve_url(&page.url, src) {
                    brand.insert("logo_url".into(), json!(logo_url.as_str()));
                    brand.insert("logo_alt".into(), json!(logo.value().attr("alt").unwrap_or("")));
                }
            }
        }

        // Company name from the copyright notice
        if let Some(text) = find_text(&document, &COPYRIGHT_COMPANY_PATTERN) {
            if let Some(captures) = COPYRIGHT_COMPANY_PATTERN.captures(text) {
                if let Some(name) = captures.get(1) {
                    brand.insert("company_name".into(), json!(name.as_str().trim()));
                }
            }
        }

        brand.insert(
            "about_urls".into(),
            json!(matched_link_urls(&document, &page.url, &ABOUT_LINK_PATTERN, 3)),
        );

        for keyword in MISSION_KEYWORDS {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(keyword)))?;
            if find_text(&document, &pattern).is_some() {
                brand.insert(format!("{}_found", keyword), json!(true));
            }
        }

        Ok(Value::Object(brand))
    }
}

fn find_logo<'a>(document: &'a Html) -> Option<ElementRef<'a>> {
    for rule in LOGO_RULES {
        let candidate = match rule {
            LogoRule::AttrContains(attr) => select(document, "img")
                .into_iter()
                .find(|img| attr_matches(img, attr, &LOGO_ATTR_PATTERN)),
            LogoRule::Css(css) => select_first(document, css),
        };
        if let Some(img) = candidate {
            if img.value().attr("src").is_some() {
                return Some(img);
            }
        }
    }
    None
}
