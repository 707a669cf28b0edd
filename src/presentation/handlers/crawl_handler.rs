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

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{dto::crawl_request::CrawlRequestDto, use_cases::crawl_use_case::CrawlUseCase},
    domain::services::crawler_service::CrawlerService,
};

/// 执行站点爬取并返回聚合报告
pub async fn crawl_assets(
    Extension(service): Extension<Arc<CrawlerService>>,
    Json(payload): Json<CrawlRequestDto>,
) -> impl IntoResponse {
    let use_case = CrawlUseCase::new(service);
    match use_case.execute(payload).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}
