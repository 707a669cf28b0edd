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

use crate::config::settings::CrawlerSettings;
use crate::domain::models::crawl::CrawlRequest;
use crate::domain::models::report::{CrawlAccumulator, CrawlReport};
use crate::engines::traits::{FetchEngine, FetchRequest};
use crate::extractors::registry::ExtractorRegistry;
use crate::extractors::{Extractor, ExtractorContext, PageSnapshot, ResponseMeta};
use crate::utils::url_utils::{resolve_url, same_domain};
use dashmap::DashSet;
use futures::future::{join_all, BoxFuture};
use parking_lot::Mutex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use url::Url;

/// 爬取错误类型
#[derive(Error, Debug)]
pub enum CrawlError {
    /// 输入无效
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 单个页面的处理产出
///
/// 遍历的瞬态数据，合并进累加器后即丢弃
struct PageRecord {
    /// 各模式的提取载荷
    payloads: Vec<(String, Value)>,
    /// 页面上发现的同域链接（文档顺序）
    links: Vec<Url>,
}

/// 共享的遍历状态
struct CrawlState {
    /// 已认领的URL集合
    visited: DashSet<String>,
    /// 结果累加器
    accumulator: Mutex<CrawlAccumulator>,
}

/// 爬虫服务
///
/// 对站点执行有界并发的递归遍历：按深度和页面数预算裁剪，
/// 通过已访问集合去重，对每个成功抓取的页面运行解析出的
/// 提取器集合并合并结果
pub struct CrawlerService {
    /// 抓取引擎
    engine: Arc<dyn FetchEngine>,
    /// 提取器注册表
    registry: Arc<ExtractorRegistry>,
    /// 全局并发许可
    semaphore: Arc<Semaphore>,
    /// 单次请求超时
    request_timeout: Duration,
    /// 页面处理后的限速延迟
    crawl_delay: Duration,
    /// 每个页面最多递归的链接数
    links_per_page: usize,
}

impl CrawlerService {
    /// 创建新的爬虫服务实例
    ///
    /// # 参数
    ///
    /// * `engine` - 抓取引擎
    /// * `registry` - 提取器注册表
    /// * `settings` - 爬虫配置
    ///
    /// # 返回值
    ///
    /// 返回新的爬虫服务实例
    pub fn new(
        engine: Arc<dyn FetchEngine>,
        registry: Arc<ExtractorRegistry>,
        settings: &CrawlerSettings,
    ) -> Self {
        Self {
            engine,
            registry,
            semaphore: Arc::new(Semaphore::new(settings.max_concurrency.max(1))),
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            crawl_delay: Duration::from_millis(settings.crawl_delay_ms),
            links_per_page: settings.links_per_page,
        }
    }

    /// 执行一次完整爬取
    ///
    /// # 参数
    ///
    /// * `request` - 爬取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlReport)` - 聚合报告
    /// * `Err(CrawlError)` - 种子URL或模式列表无效
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlReport, CrawlError> {
        let seed = parse_seed_url(&request.url)?;
        if request.modes.is_empty() {
            return Err(CrawlError::InvalidInput(
                "at least one mode is required".to_string(),
            ));
        }

        let resolved = self.registry.resolve(&request.modes);
        let resolved_modes: Vec<String> = resolved.iter().map(|(name, _)| name.clone()).collect();

        let state = CrawlState {
            visited: DashSet::new(),
            accumulator: Mutex::new(CrawlAccumulator::new(&resolved_modes, request.max_pages)),
        };

        self.crawl_recursive(seed, 0, request, &resolved, &state)
            .await;

        Ok(state.accumulator.into_inner().finalize())
    }

    /// 递归处理一个候选URL
    ///
    /// 停止条件在做任何工作之前检查；对已访问集合的插入即是
    /// 认领，确保并发的兄弟分支不会重复抓取同一URL。许可仅
    /// 覆盖抓取和提取，在等待子分支之前释放。
    fn crawl_recursive<'a>(
        &'a self,
        url: Url,
        depth: u32,
        request: &'a CrawlRequest,
        extractors: &'a [(String, Arc<dyn Extractor>)],
        state: &'a CrawlState,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            if depth > request.max_depth {
                return;
            }
            if state.accumulator.lock().is_budget_exhausted() {
                return;
            }
            // Atomic check-and-claim
            if !state.visited.insert(url.to_string()) {
                return;
            }

            let record = {
                let Ok(_permit) = self.semaphore.acquire().await else {
                    return;
                };
                self.process_page(&url, extractors).await
            };

            if let Some(record) = record {
                let merged = state.accumulator.lock().add_page(record.payloads);

                if merged && depth < request.max_depth {
                    let branches: Vec<_> = record
                        .links
                        .into_iter()
                        .take(self.links_per_page)
                        .filter(|link| !state.visited.contains(link.as_str()))
                        .map(|link| self.crawl_recursive(link, depth + 1, request, extractors, state))
                        .collect();
                    if !branches.is_empty() {
                        join_all(branches).await;
                    }
                }
            }

            // Rate limiting
            tokio::time::sleep(self.crawl_delay).await;
        })
    }

    /// 抓取并提取单个页面
    ///
    /// 非200状态或抓取失败只影响该URL，返回None且不中断爬取。
    /// 单个提取器的失败只影响该模式，记录日志后继续。
    async fn process_page(
        &self,
        url: &Url,
        extractors: &[(String, Arc<dyn Extractor>)],
    ) -> Option<PageRecord> {
        let fetch_request = FetchRequest {
            url: url.to_string(),
            timeout: self.request_timeout,
        };

        let response = match self.engine.fetch(&fetch_request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "Fetch failed");
                return None;
            }
        };

        if response.status_code != 200 {
            debug!(url = %url, status = response.status_code, "Skipping non-200 page");
            return None;
        }

        let meta = ResponseMeta::from_response(&response);
        let page = PageSnapshot {
            url: url.clone(),
            html: response.content,
        };
        let ctx = ExtractorContext {
            engine: Some(self.engine.clone()),
            response: Some(meta),
        };

        let mut payloads = Vec::new();
        for (mode, extractor) in extractors {
            match extractor.extract(&page, &ctx).await {
                Ok(value) if !payload_is_empty(&value) => payloads.push((mode.clone(), value)),
                Ok(_) => {}
                Err(e) => {
                    warn!(url = %url, mode = %mode, error = %e, "Extractor failed");
                }
            }
        }

        let links = LinkDiscoverer::extract_links(&page.html, &page.url);
        Some(PageRecord { payloads, links })
    }
}

/// 解析并校验种子URL
fn parse_seed_url(url: &str) -> Result<Url, CrawlError> {
    let parsed = Url::parse(url)
        .map_err(|_| CrawlError::InvalidInput(format!("invalid URL: {}", url)))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(CrawlError::InvalidInput(format!("invalid URL: {}", url)));
    }
    Ok(parsed)
}

/// 空载荷不参与合并
fn payload_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// 链接发现器
///
/// 负责从HTML内容中提取可递归的同域链接
pub struct LinkDiscoverer;

impl LinkDiscoverer {
    /// 从HTML内容中提取同域链接
    ///
    /// 忽略锚点、mailto和javascript链接；结果解析为绝对URL，
    /// 去掉片段标识，按文档顺序去重
    ///
    /// # 参数
    ///
    /// * `html_content` - HTML内容
    /// * `base_url` - 页面URL
    ///
    /// # 返回值
    ///
    /// 提取到的同域链接列表（文档顺序）
    pub fn extract_links(html_content: &str, base_url: &Url) -> Vec<Url> {
        let fragment = Html::parse_document(html_content);
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        let mut seen = std::collections::HashSet::new();
        let mut links = Vec::new();

        for element in fragment.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            // Ignore fragment identifiers, mailto and javascript links
            if href.starts_with('#')
                || href.starts_with("mailto:")
                || href.starts_with("javascript:")
            {
                continue;
            }

            let Ok(mut url) = resolve_url(base_url, href) else {
                continue;
            };
            // Only keep same-domain http/https links
            if url.scheme() != "http" && url.scheme() != "https" {
                continue;
            }
            if !same_domain(&url, base_url) {
                continue;
            }

            // Remove fragment to improve deduplication
            url.set_fragment(None);
            if seen.insert(url.to_string()) {
                links.push(url);
            }
        }

        links
    }
}
