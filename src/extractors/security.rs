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

use crate::extractors::document::truncate_chars;
use crate::extractors::patterns::SECURITY_HEADERS;
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

/// 安全信息提取器
///
/// 检查HTTPS和常见安全响应头的存在情况
pub struct SecurityExtractor;

#[async_trait]
impl Extractor for SecurityExtractor {
    fn name(&self) -> &'static str {
        "security"
    }

    async fn extract(&self, page: &PageSnapshot, ctx: &ExtractorContext) -> Result<Value> {
        let Some(response) = &ctx.response else {
            return Ok(json!({ "error": "HTTP response required" }));
        };

        let https = page.url.scheme() == "https";

        let mut headers = Map::new();
        for (header, name) in SECURITY_HEADERS {
            let value = response.header(header).unwrap_or("");
            headers.insert(
                (*name).to_string(),
                json!({
                    "present": !value.is_empty(),
                    "value": if value.is_empty() {
                        "Not set".to_string()
                    } else {
                        truncate_chars(value, 100)
                    },
                }),
            );
        }

        let mut security = Map::new();
        security.insert("page_url".into(), json!(page.url.as_str()));
        security.insert("https".into(), json!(https));
        security.insert("headers".into(), Value::Object(headers));
        if https {
            security.insert(
                "ssl".into(),
                json!({ "enabled": true, "url": page.url.as_str() }),
            );
        }

        Ok(Value::Object(security))
    }
}
