// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提取器模块
///
/// 该模块实现了针对已抓取页面的各类数据提取器，每个提取器
/// 负责一种提取模式（mode），由注册表统一管理：
/// - 图片提取（images）、元数据提取（meta）
/// - 品牌信息（brand）、SEO分析（seo）、性能指标（performance）
/// - 安全信息（security）、合规信息（compliance）、基础设施（infrastructure）
/// - 法务信息（legal）、招聘信息（careers）、客户案例（references）
/// - 联系方式（contact）
///
/// 所有提取器都是无状态的，可以跨页面并发调用。
pub mod brand;
pub mod careers;
pub mod compliance;
pub mod contact;
pub mod document;
pub mod images;
pub mod infrastructure;
pub mod legal;
pub mod meta;
pub mod patterns;
pub mod performance;
pub mod references;
pub mod registry;
pub mod security;
pub mod seo;

use crate::engines::traits::{FetchEngine, FetchResponse};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// 页面快照
///
/// 提取器的输入：页面URL和原始HTML文本。提取器在需要时
/// 自行解析HTML，解析结果不跨越挂起点传递。
pub struct PageSnapshot {
    /// 页面URL
    pub url: Url,
    /// 原始HTML文本
    pub html: String,
}

impl PageSnapshot {
    /// 解析页面HTML
    pub fn document(&self) -> scraper::Html {
        scraper::Html::parse_document(&self.html)
    }
}

/// 响应元数据
///
/// 部分提取器需要的原始响应信息，键统一为小写
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应头
    pub headers: HashMap<String, String>,
}

impl ResponseMeta {
    /// 从抓取响应构造响应元数据
    pub fn from_response(response: &FetchResponse) -> Self {
        Self {
            status_code: response.status_code,
            headers: response.headers.clone(),
        }
    }

    /// 按名称读取响应头（大小写无关）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// 提取器上下文
///
/// 为部分提取器提供可选的协作方：performance需要抓取引擎，
/// security和infrastructure需要响应元数据。缺失时提取器返回
/// 错误形态的载荷而不是使整个页面失败。
#[derive(Default, Clone)]
pub struct ExtractorContext {
    /// 抓取引擎
    pub engine: Option<Arc<dyn FetchEngine>>,
    /// 响应元数据
    pub response: Option<ResponseMeta>,
}

/// 提取器特质
///
/// 所有提取模式的统一接口。实现必须无状态且可并发调用；
/// 返回值为该模式的JSON载荷（序列模式为数组，映射模式为对象）。
#[async_trait]
pub trait Extractor: Send + Sync {
    /// 模式名称
    fn name(&self) -> &'static str;

    /// 对页面执行提取
    async fn extract(&self, page: &PageSnapshot, ctx: &ExtractorContext) -> Result<Value>;
}
