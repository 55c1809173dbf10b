use thiserror::Error;

// =========================================================
// API 错误 (API Errors)
// =========================================================

/// API 客户端边界上的所有失败
///
/// `Display` 的结果直接展示给用户，因此消息保持可读。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 传输层失败（断网、CORS、DNS 等）
    #[error("Network error: {0}")]
    Network(String),
    /// 非 2xx 状态码
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 格式正确但 `success: false` 的响应
    #[error("{0}")]
    Rejected(String),
    /// 401：需要重新登录
    #[error("Authentication required. Please login again.")]
    Unauthorized,
    /// 响应体无法解析
    #[error("Malformed response: {0}")]
    Decode(String),
    /// 请求体无法序列化
    #[error("Could not encode request: {0}")]
    Encode(String),
    /// 发送前的前置条件不满足
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }

    /// 对应的 HTTP 状态码（仅 `Status` 与 `Unauthorized` 有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
