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

//! 提取器共享的文档查询辅助函数。
//!
//! scraper的Html不是Send的，因此所有查询都在同步代码中完成，
//! 解析结果不跨越挂起点。

use crate::utils::media::clean_text;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// 返回CSS选择器的全部匹配元素（文档顺序）
///
/// 无效的选择器视为没有匹配
pub fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// 返回CSS选择器的第一个匹配元素
pub fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

/// 判断元素的属性值是否匹配给定模式
pub fn attr_matches(element: &ElementRef, attr: &str, pattern: &Regex) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|v| pattern.is_match(v))
}

/// 元素的规整文本
pub fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// 文档中的所有文本节点及其父元素（文档顺序）
pub fn text_nodes<'a>(document: &'a Html) -> Vec<(&'a str, Option<ElementRef<'a>>)> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let parent = node.parent().and_then(ElementRef::wrap);
                Some((&**text, parent))
            }
            _ => None,
        })
        .collect()
}

/// 第一个匹配模式的文本节点
pub fn find_text<'a>(document: &'a Html, pattern: &Regex) -> Option<&'a str> {
    text_nodes(document)
        .into_iter()
        .map(|(text, _)| text)
        .find(|text| pattern.is_match(text))
}

/// 匹配模式的文本节点数量
pub fn text_match_count(document: &Html, pattern: &Regex) -> usize {
    text_nodes(document)
        .iter()
        .filter(|(text, _)| pattern.is_match(text))
        .count()
}

/// 按字符边界截断文本
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// 收集前N个href匹配模式的链接并解析为绝对URL（文档顺序）
pub fn matched_link_urls(
    document: &Html,
    base: &url::Url,
    pattern: &Regex,
    limit: usize,
) -> Vec<String> {
    select(document, "a[href]")
        .iter()
        .filter(|a| attr_matches(a, "href", pattern))
        .take(limit)
        .filter_map(|a| {
            a.value()
                .attr("href")
                .and_then(|href| crate::utils::url_utils::resolve_url(base, href).ok())
        })
        .map(|u| u.to_string())
        .collect()
}
