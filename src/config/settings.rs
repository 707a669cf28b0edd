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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器和爬虫的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 爬虫配置
    pub crawler: CrawlerSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 爬虫配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 全局并发抓取许可数
    pub max_concurrency: usize,
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 每个页面处理后的限速延迟（毫秒）
    pub crawl_delay_ms: u64,
    /// 每个页面最多递归的链接数
    pub links_per_page: usize,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 5,
            request_timeout_secs: 30,
            crawl_delay_ms: 1000,
            links_per_page: 10,
            user_agent: "Mozilla/5.0 (compatible; sitescan/1.0)".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default crawler settings
            .set_default("crawler.max_concurrency", 5)?
            .set_default("crawler.request_timeout_secs", 30)?
            .set_default("crawler.crawl_delay_ms", 1000)?
            .set_default("crawler.links_per_page", 10)?
            .set_default("crawler.user_agent", "Mozilla/5.0 (compatible; sitescan/1.0)")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SITESCAN").separator("__"));

        builder.build()?.try_deserialize()
    }
}
