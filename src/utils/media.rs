// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// 已知图片扩展名到格式名的映射表
const IMAGE_FORMATS: &[(&str, &str)] = &[
    (".jpg", "jpeg"),
    (".jpeg", "jpeg"),
    (".png", "png"),
    (".gif", "gif"),
    (".webp", "webp"),
    (".svg", "svg"),
    (".bmp", "bmp"),
    (".ico", "ico"),
];

/// 图片相关的路径片段
static IMAGE_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/image|/img|/photo|/picture|/media").unwrap());

/// 缩略图和图标的URL片段
const THUMBNAIL_PATTERNS: &[&str] = &[
    "thumb",
    "thumbnail",
    "icon",
    "small",
    "tiny",
    "avatar",
    "logo",
    "badge",
    "button",
];

/// 将字节数转换为人类可读的字符串
pub fn get_file_size_str(size_bytes: usize) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}

/// 判断URL是否指向图片资源
///
/// 先检查路径扩展名（忽略查询串），再检查图片相关的路径片段
pub fn is_valid_image_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let lower = url.to_lowercase();
    let path = match Url::parse(&lower) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => lower.split('?').next().unwrap_or("").to_string(),
    };

    if IMAGE_FORMATS.iter().any(|(ext, _)| path.ends_with(ext)) {
        return true;
    }

    IMAGE_PATH_PATTERN.is_match(url)
}

/// 从URL中推断图片格式
pub fn extract_image_format(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    for (ext, format) in IMAGE_FORMATS {
        if lower.contains(ext) {
            return format;
        }
    }
    "unknown"
}

/// 判断图片是否可能是缩略图或图标
pub fn is_thumbnail_or_icon(url: &str, width: Option<u32>, height: Option<u32>) -> bool {
    let lower = url.to_lowercase();
    if THUMBNAIL_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    if let (Some(w), Some(h)) = (width, height) {
        if w < 200 || h < 200 {
            return true;
        }
    }

    false
}

/// 清理并规整文本
///
/// 折叠空白字符并去除不可打印字符
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
