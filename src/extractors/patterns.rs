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

//! 提取器使用的所有启发式模式表。
//!
//! 各提取器的匹配规则集中在这里维护，调整启发式时不需要
//! 改动提取器或遍历逻辑。

use once_cell::sync::Lazy;
use regex::Regex;

/// 产品图片的class属性模式
pub static IMAGE_CLASS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["product", "item", "shop", "gallery"]
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
        .collect()
});

/// 产品图片的alt属性模式
pub static IMAGE_ALT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)product|item|shop").unwrap());

/// 产品图片的src路径模式
pub static IMAGE_SRC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/product|/item|/shop").unwrap());

/// 主要内容容器的class属性模式
pub static CONTENT_CONTAINER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)product|content").unwrap());

/// Logo查找规则
///
/// 按优先级排列：先检查img元素的属性，再尝试CSS选择器
pub enum LogoRule {
    /// img元素的指定属性包含"logo"
    AttrContains(&'static str),
    /// CSS选择器的第一个匹配
    Css(&'static str),
}

/// Logo查找规则表（按优先级）
pub const LOGO_RULES: &[LogoRule] = &[
    LogoRule::AttrContains("alt"),
    LogoRule::AttrContains("class"),
    LogoRule::AttrContains("id"),
    LogoRule::Css(".logo img"),
    LogoRule::Css("#logo img"),
    LogoRule::Css("header img"),
];

/// Logo属性值模式
pub static LOGO_ATTR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)logo").unwrap());

/// 版权声明中的公司名模式（捕获组1为公司名）
pub static COPYRIGHT_COMPANY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)©\s*\d{4}\s*(.+?)(?:\.|,|All)").unwrap());

/// 版权声明模式
pub static COPYRIGHT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)©.*\d{4}").unwrap());

/// 关于我们链接的href模式
pub static ABOUT_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)about|hakkinda|kurumsal").unwrap());

/// 使命/愿景关键词
pub const MISSION_KEYWORDS: &[&str] = &[
    "mission", "vision", "misyon", "vizyon", "değerler", "values",
];

/// 招聘链接的href模式
pub static CAREER_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)career|kariyer|job|is.*ilanlari|insan.*kaynak").unwrap());

/// 客户案例区块关键词
pub const REFERENCE_KEYWORDS: &[&str] = &[
    "references",
    "referans",
    "clients",
    "müşteri",
    "testimonial",
    "partners",
    "iş ortakları",
];

/// 推荐语区块的class模式
pub static TESTIMONIAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)testimonial|review").unwrap());

/// 隐私政策链接的href模式
pub static PRIVACY_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)privacy|gizlilik|kvkk").unwrap());

/// 服务条款链接的href模式
pub static TERMS_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)terms|kullanim.*kosul|sozlesme").unwrap());

/// KVKK相关文本模式
pub static KVKK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)kvkk|kişisel.*veri|6698").unwrap());

/// 数据保护负责人关键词
pub const DPO_KEYWORDS: &[&str] = &["veri sorumlusu", "data protection officer", "dpo"];

/// 电子邮件地址模式
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// 电话号码模式（本地固定格式与通用国际格式）
pub static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+90[\s.-]?\d{3}[\s.-]?\d{3}[\s.-]?\d{2}[\s.-]?\d{2}",
        r"0\d{3}[\s.-]?\d{3}[\s.-]?\d{2}[\s.-]?\d{2}",
        r"\(\d{3}\)[\s.-]?\d{3}[\s.-]?\d{2}[\s.-]?\d{2}",
        r"\+\d{1,3}[\s.-]?\d{3,14}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// 社交媒体平台及其链接模式（每个平台取第一个匹配）
pub static SOCIAL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("facebook", Regex::new(r"(?i)facebook\.com/[\w.-]+").unwrap()),
        ("twitter", Regex::new(r"(?i)twitter\.com/[\w.-]+").unwrap()),
        (
            "linkedin",
            Regex::new(r"(?i)linkedin\.com/(?:company|in)/[\w.-]+").unwrap(),
        ),
        (
            "instagram",
            Regex::new(r"(?i)instagram\.com/[\w.-]+").unwrap(),
        ),
        (
            "youtube",
            Regex::new(r"(?i)youtube\.com/(?:c|channel|user)/[\w.-]+").unwrap(),
        ),
    ]
});

/// 地址关键词
pub const ADDRESS_KEYWORDS: &[&str] = &["adres", "address", "konum", "location"];

/// 联系页面链接的href模式
pub static CONTACT_LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)contact|iletisim|bize.*ulas").unwrap());

/// Cookie提示关键词模式
pub static COOKIE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)cookie|çerez|gdpr|consent").unwrap());

/// 跳转导航链接文本模式
pub static SKIP_NAV_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)skip.*nav").unwrap());

/// ISO认证编号模式
pub static ISO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ISO[/IEC]*\s*\d{4,5}").unwrap());

/// 安全响应头表：(响应头名, 报告名)
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("strict-transport-security", "HSTS"),
    ("x-content-type-options", "X-Content-Type-Options"),
    ("x-frame-options", "X-Frame-Options"),
    ("x-xss-protection", "X-XSS-Protection"),
    ("content-security-policy", "CSP"),
    ("referrer-policy", "Referrer-Policy"),
    ("permissions-policy", "Permissions-Policy"),
];

/// CDN识别表：(响应头名, CDN名)，取第一个出现的
pub const CDN_HEADERS: &[(&str, &str)] = &[
    ("cf-ray", "Cloudflare"),
    ("x-amz-cf-id", "Amazon CloudFront"),
    ("x-akamai-transformed", "Akamai"),
    ("x-cdn", "Generic CDN"),
];
