// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::CrawlRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CrawlRequestDto {
    #[validate(url)]
    pub url: String,
    #[validate(length(min = 1, message = "at least one mode is required"))]
    pub modes: Vec<String>,
    #[validate(range(min = 0, max = 5))]
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_depth() -> u32 {
    1
}

fn default_max_pages() -> usize {
    50
}

impl From<CrawlRequestDto> for CrawlRequest {
    fn from(dto: CrawlRequestDto) -> Self {
        Self {
            url: dto.url,
            modes: dto.modes,
            max_depth: dto.depth,
            max_pages: dto.max_pages,
        }
    }
}
