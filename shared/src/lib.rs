use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod date;
pub mod draft;
pub mod error;
pub mod http;
pub mod order;
pub mod protocol;
pub mod storage;
pub mod view;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存会话的键
pub const AUTH_STORAGE_KEY: &str = "levelsproshop_auth";
/// 热门商品轮播的最大数量
pub const TRENDING_LIMIT: u32 = 6;
/// 表单未填写保修时发送的默认值
pub const DEFAULT_WARRANTY: &str = "3 Months";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商品分类
///
/// 序列化值与后端保持一致（即 UI 上显示的名称）。
/// 后端返回未知分类时落入 `Other`，只在 "All" 下可见。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Laptops")]
    Laptops,
    #[serde(rename = "Desktops")]
    Desktops,
    #[serde(rename = "Gaming PCs")]
    GamingPcs,
    #[serde(rename = "Accessories")]
    Accessories,
    #[serde(other)]
    Other,
}

impl Category {
    /// 可供选择的分类（不含 `Other`）
    pub const ALL: [Category; 4] = [
        Category::Laptops,
        Category::Desktops,
        Category::GamingPcs,
        Category::Accessories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Laptops => "Laptops",
            Category::Desktops => "Desktops",
            Category::GamingPcs => "Gaming PCs",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 商品
///
/// 客户端从不原地修改商品，重新拉取时整体替换列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub category: Category,
    /// 展示用价格字符串，例如 "950,000 TZS"
    pub price: String,
    #[serde(default)]
    pub specs: Vec<String>,
    #[serde(default)]
    pub warranty: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// 第一张非空图片；没有时由 UI 显示占位图
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }

    /// 名称是否包含查询串（大小写不敏感）。空查询匹配所有商品。
    pub fn name_contains(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// 后端的 id 既可能是字符串也可能是整数
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// 可选 id：缺失或为 `null` 时为 `None`
pub(crate) fn opt_id_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// `null` 视为空串
pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 创建 / 全量更新商品的请求体
///
/// `images_data` 为去掉 data-URL 前缀后的 base64 字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub specs: Vec<String>,
    pub warranty: String,
    pub images_data: Vec<String>,
}

/// 商品列表响应中 `data` 的结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录成功时 `data` 的结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(deserialize_with = "string_or_null")]
    pub token: String,
    #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
