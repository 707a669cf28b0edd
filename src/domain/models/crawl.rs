// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 爬取请求
///
/// 一次爬取的不可变参数集合
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRequest {
    /// 种子URL
    pub url: String,
    /// 请求的提取模式
    pub modes: Vec<String>,
    /// 最大递归深度
    pub max_depth: u32,
    /// 最大页面数
    pub max_pages: usize,
}
