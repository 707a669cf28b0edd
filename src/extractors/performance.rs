use crate::engines::traits::FetchRequest;
use crate::extractors::document::select;
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot};
use crate::utils::media::get_file_size_str;
use anyhow::Result;
use async_trait::async_trait;
use scraper::Html;
use serde_json::{json, Value};
use std::time::Duration;

/// 页面重新抓取的超时时间
const REFETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// 性能指标提取器
///
/// 对页面URL发起一次计时的二次抓取，报告加载时间、
/// 页面大小、状态码和资源提示数量
pub struct PerformanceExtractor;

#[async_trait]
impl Extractor for PerformanceExtractor {
    fn name(&self) -> &'static str {
        "performance"
    }

    async fn extract(&self, page: &PageSnapshot, ctx: &ExtractorContext) -> Result<Value> {
        let Some(engine) = &ctx.engine else {
            return Ok(json!({ "error": "fetch engine required" }));
        };

        let request = FetchRequest {
            url: page.url.to_string(),
            timeout: REFETCH_TIMEOUT,
        };

        match engine.fetch(&request).await {
            Ok(response) => {
                let hints = resource_hints(&response.content);
                Ok(json!({
                    "page_url": page.url.as_str(),
                    "load_time": format!("{:.2}s", response.response_time_ms as f64 / 1000.0),
                    "page_size": get_file_size_str(response.content.len()),
                    "status_code": response.status_code,
                    "resource_hints": hints,
                }))
            }
            Err(e) => Ok(json!({
                "page_url": page.url.as_str(),
                "error": e.to_string(),
            })),
        }
    }
}

fn resource_hints(html: &str) -> Value {
    let document = Html::parse_document(html);
    json!({
        "preconnect": select(&document, r#"link[rel="preconnect"]"#).len(),
        "prefetch": select(&document, r#"link[rel="prefetch"]"#).len(),
        "preload": select(&document, r#"link[rel="preload"]"#).len(),
    })
}
