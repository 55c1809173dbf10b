use crate::error::ApiError;

/// 一份远程数据及其加载状态
///
/// 每次发起请求都会递增代数，只接受最新一代的结果，
/// 过期的响应直接丢弃。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Remote<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl<T> Remote<T> {
    /// 标记为加载中并返回本次请求的代数
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        self.issued
    }

    /// 写入结果；代数过期时返回 `false` 且不修改任何状态
    pub fn settle(&mut self, generation: u64, result: Result<T, ApiError>) -> bool {
        if generation != self.issued {
            tracing::debug!(generation, latest = self.issued, "discarding stale response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn latest_generation(&self) -> u64 {
        self.issued
    }
}

impl<T: Default> Remote<T> {
    /// 清空数据，并让仍在进行中的请求过期
    pub fn clear(&mut self) {
        self.issued += 1;
        self.data = T::default();
        self.loading = false;
        self.error = None;
    }
}

/// 后台操作结果的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}
