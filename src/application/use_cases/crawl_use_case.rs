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

use crate::application::dto::crawl_request::CrawlRequestDto;
use crate::domain::models::crawl::CrawlRequest;
use crate::domain::models::report::CrawlReport;
use crate::domain::services::crawler_service::{CrawlError, CrawlerService};
use axum::http::StatusCode;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum CrawlUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Crawl failed: {0}")]
    Crawl(#[from] CrawlError),
}

impl From<CrawlUseCaseError> for (StatusCode, String) {
    fn from(e: CrawlUseCaseError) -> Self {
        match e {
            CrawlUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            CrawlUseCaseError::Crawl(CrawlError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
        }
    }
}

/// 爬取用例
///
/// 校验请求DTO，转换为领域请求并交由爬虫服务执行
pub struct CrawlUseCase {
    service: Arc<CrawlerService>,
}

impl CrawlUseCase {
    pub fn new(service: Arc<CrawlerService>) -> Self {
        Self { service }
    }

    /// 执行爬取
    ///
    /// # 参数
    ///
    /// * `payload` - 请求DTO
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlReport)` - 聚合报告
    /// * `Err(CrawlUseCaseError)` - 校验或爬取失败
    pub async fn execute(&self, payload: CrawlRequestDto) -> Result<CrawlReport, CrawlUseCaseError> {
        payload
            .validate()
            .map_err(|e| CrawlUseCaseError::ValidationError(e.to_string()))?;

        let request = CrawlRequest::from(payload);
        Ok(self.service.crawl(&request).await?)
    }
}
