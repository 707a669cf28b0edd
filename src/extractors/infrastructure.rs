// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::extractors::patterns::CDN_HEADERS;
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

/// 基础设施信息提取器
///
/// 从响应头识别服务器软件和CDN
pub struct InfrastructureExtractor;

#[async_trait]
impl Extractor for InfrastructureExtractor {
    fn name(&self) -> &'static str {
        "infrastructure"
    }

    async fn extract(&self, _page: &PageSnapshot, ctx: &ExtractorContext) -> Result<Value> {
        let Some(response) = &ctx.response else {
            return Ok(json!({ "error": "HTTP response required" }));
        };

        let mut infrastructure = Map::new();
        infrastructure.insert(
            "server".into(),
            json!(response.header("server").unwrap_or("Not disclosed")),
        );
        infrastructure.insert(
            "powered_by".into(),
            json!(response.header("x-powered-by").unwrap_or("Not disclosed")),
        );

        for (header, cdn) in CDN_HEADERS {
            if response.header(header).is_some() {
                infrastructure.insert("cdn".into(), json!(cdn));
                break;
            }
        }

        Ok(Value::Object(infrastructure))
    }
}
