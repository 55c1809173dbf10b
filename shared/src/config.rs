//! 客户端配置
//!
//! WASM 中没有运行时环境变量，因此在构建时通过 `option_env!` 读取，
//! 读不到则使用默认值。

use crate::AUTH_STORAGE_KEY;

/// 这些是默认值，构建时没有设置对应变量则使用它们
pub const DEFAULT_API_BASE_URL: &str = "https://sabinabruno.pythonanywhere.com/";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "255674373436";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 以单个 `/` 结尾的 API 根地址
    pub api_base_url: String,
    /// wa.me 链接使用的号码（不含 `+`）
    pub whatsapp_number: String,
    pub auth_storage_key: String,
}

impl ClientConfig {
    /// 从构建环境读取配置 (`LEVELSPRO_API_URL`, `LEVELSPRO_WHATSAPP`)
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("LEVELSPRO_API_URL"), option_env!("LEVELSPRO_WHATSAPP"))
    }

    /// 每个字段：有值且非空就用，否则回退到默认值
    pub fn resolve(api_url: Option<&str>, whatsapp: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        let whatsapp_number = whatsapp
            .map(|v| v.trim().trim_start_matches('+'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER);

        Self {
            api_base_url: normalize_base_url(api_base_url),
            whatsapp_number: whatsapp_number.to_string(),
            auth_storage_key: AUTH_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// 保证以且仅以一个 `/` 结尾
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}
