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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// 按序列累积的提取模式
pub const SEQUENCE_MODES: &[&str] = &["images", "meta", "careers", "references"];

/// 模式数据形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    /// 有序序列，逐页追加
    Sequence,
    /// 单一映射，逐页浅合并
    Mapping,
}

/// 模式的数据形态
pub fn mode_kind(mode: &str) -> ModeKind {
    if SEQUENCE_MODES.contains(&mode) {
        ModeKind::Sequence
    } else {
        ModeKind::Mapping
    }
}

/// 爬取结果累加器
///
/// 持有每个请求模式的累积状态。序列模式追加条目，
/// 映射模式按键浅合并，后来的页面覆盖相同的键。
#[derive(Debug)]
pub struct CrawlAccumulator {
    pages_crawled: usize,
    max_pages: usize,
    data: Vec<(String, Value)>,
}

impl CrawlAccumulator {
    /// 创建新的累加器，为每个模式预设空的默认形态
    ///
    /// # 参数
    ///
    /// * `modes` - 已解析的模式名称列表
    /// * `max_pages` - 页面数预算
    pub fn new(modes: &[String], max_pages: usize) -> Self {
        let mut data: Vec<(String, Value)> = Vec::new();
        for mode in modes {
            if data.iter().any(|(name, _)| name == mode) {
                continue;
            }
            let initial = match mode_kind(mode) {
                ModeKind::Sequence => Value::Array(Vec::new()),
                ModeKind::Mapping => Value::Object(Map::new()),
            };
            data.push((mode.clone(), initial));
        }
        Self {
            pages_crawled: 0,
            max_pages,
            data,
        }
    }

    /// 已成功处理的页面数
    pub fn pages_crawled(&self) -> usize {
        self.pages_crawled
    }

    /// 页面数预算是否已用尽
    pub fn is_budget_exhausted(&self) -> bool {
        self.pages_crawled >= self.max_pages
    }

    /// 合并一个页面的提取载荷
    ///
    /// 预算已用尽时拒绝合并并返回false；否则计入页面数，
    /// 序列模式追加条目，映射模式按键覆盖合并
    pub fn add_page(&mut self, payloads: Vec<(String, Value)>) -> bool {
        if self.is_budget_exhausted() {
            return false;
        }
        self.pages_crawled += 1;

        for (mode, value) in payloads {
            let Some((_, slot)) = self.data.iter_mut().find(|(name, _)| *name == mode) else {
                continue;
            };
            match (slot, value) {
                (Value::Array(items), Value::Array(new_items)) => items.extend(new_items),
                (Value::Object(map), Value::Object(new_map)) => {
                    for (key, val) in new_map {
                        map.insert(key, val);
                    }
                }
                _ => {}
            }
        }
        true
    }

    /// 定稿为聚合报告
    ///
    /// 图片序列按url去重，保留第一次出现的条目
    pub fn finalize(self) -> CrawlReport {
        let mut data = Map::new();
        for (mode, mut value) in self.data {
            if mode == "images" {
                if let Value::Array(items) = &mut value {
                    let mut seen: HashSet<String> = HashSet::new();
                    items.retain(|item| {
                        match item.get("url").and_then(Value::as_str) {
                            Some(url) => seen.insert(url.to_string()),
                            None => true,
                        }
                    });
                }
            }
            data.insert(mode, value);
        }
        CrawlReport {
            pages_crawled: self.pages_crawled,
            data,
        }
    }
}

/// 聚合报告
///
/// 一次爬取的最终产出：成功处理的页面数加上每个请求模式
/// 累积的数据字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// 成功处理的页面数
    pub pages_crawled: usize,
    /// 每个模式的累积数据
    #[serde(flatten)]
    pub data: Map<String, Value>,
}
