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

use crate::extractors::brand::BrandExtractor;
use crate::extractors::careers::CareersExtractor;
use crate::extractors::compliance::ComplianceExtractor;
use crate::extractors::contact::ContactExtractor;
use crate::extractors::images::ImagesExtractor;
use crate::extractors::infrastructure::InfrastructureExtractor;
use crate::extractors::legal::LegalExtractor;
use crate::extractors::meta::MetadataExtractor;
use crate::extractors::performance::PerformanceExtractor;
use crate::extractors::references::ReferencesExtractor;
use crate::extractors::security::SecurityExtractor;
use crate::extractors::seo::SeoExtractor;
use crate::extractors::Extractor;
use std::collections::HashMap;
use std::sync::Arc;

/// 所有支持的提取模式
pub const MODES: &[&str] = &[
    "images",
    "meta",
    "brand",
    "seo",
    "performance",
    "security",
    "compliance",
    "infrastructure",
    "legal",
    "careers",
    "references",
    "contact",
];

/// 提取器注册表
///
/// 管理所有提取模式到提取器实例的映射
pub struct ExtractorRegistry {
    extractors: HashMap<&'static str, Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// 创建包含全部内置提取器的注册表
    pub fn new() -> Self {
        let entries: Vec<Arc<dyn Extractor>> = vec![
            Arc::new(ImagesExtractor),
            Arc::new(MetadataExtractor),
            Arc::new(BrandExtractor),
            Arc::new(SeoExtractor),
            Arc::new(PerformanceExtractor),
            Arc::new(SecurityExtractor),
            Arc::new(ComplianceExtractor),
            Arc::new(InfrastructureExtractor),
            Arc::new(LegalExtractor),
            Arc::new(CareersExtractor),
            Arc::new(ReferencesExtractor),
            Arc::new(ContactExtractor),
        ];
        Self {
            extractors: entries.into_iter().map(|e| (e.name(), e)).collect(),
        }
    }

    /// 获取指定模式的提取器
    pub fn get(&self, mode: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.get(mode).cloned()
    }

    /// 解析请求的模式列表
    ///
    /// 保持调用方给出的顺序；未知模式和重复模式被静默丢弃
    ///
    /// # 参数
    ///
    /// * `modes` - 请求的模式名称列表
    ///
    /// # 返回值
    ///
    /// 模式名称到提取器实例的有序列表
    pub fn resolve(&self, modes: &[String]) -> Vec<(String, Arc<dyn Extractor>)> {
        let mut resolved: Vec<(String, Arc<dyn Extractor>)> = Vec::new();
        for mode in modes {
            if resolved.iter().any(|(name, _)| name == mode) {
                continue;
            }
            if let Some(extractor) = self.get(mode) {
                resolved.push((mode.clone(), extractor));
            }
        }
        resolved
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
