//! 认证模块
//!
//! 会话以 JSON 形式保存在键值存储中。读取时对损坏的数据保持容忍：
//! 任何无法解析或字段不完整的会话都视为"未登录"，而不是报错。

use crate::LoginData;
use crate::LoginRequest;
use crate::{opt_id_from_string_or_number, string_or_null};
use crate::api::StoreApi;
use crate::http::HttpClient;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};


/// 持久化的会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(default, deserialize_with = "string_or_null")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "opt_id_from_string_or_number"
    )]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub token: String,
    #[serde(rename = "loggedIn", default)]
    pub logged_in: bool,
}

impl AuthSession {
    pub fn from_login(data: LoginData) -> Self {
        Self {
            username: data.username,
            email: data.email,
            user_id: data.user_id,
            token: data.token,
            logged_in: true,
        }
    }

    /// `loggedIn == true` 且 token 非空
    pub fn is_valid(&self) -> bool {
        self.logged_in && !self.token.is_empty()
    }

    /// 仅当会话有效时返回 token
    pub fn token(&self) -> Option<&str> {
        self.is_valid().then_some(self.token.as_str())
    }
}

/// 会话存储
pub struct AuthStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> AuthStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// 登录并保存会话
    ///
    /// 任何失败（网络、非 2xx、信封异常）都返回 `false` 而不是报错，
    /// 失败细节写入日志。
    pub async fn login<C: HttpClient>(
        &self,
        api: &StoreApi<C>,
        username: &str,
        password: &str,
    ) -> bool {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let data = match api.login(&credentials).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(username, error = %e, "login failed");
                return false;
            }
        };

        let session = AuthSession::from_login(data);
        if !session.is_valid() {
            tracing::error!(username, "login response carried no token");
            return false;
        }

        let saved = serde_json::to_string(&session)
            .map(|json| self.storage.set(&self.key, &json))
            .unwrap_or(false);
        if !saved {
            // 会话写入存储才算登录成功
            tracing::error!(username, "could not persist session");
            return false;
        }

        tracing::info!(username = %session.username, "logged in");
        true
    }

    /// 无条件清除会话
    pub fn logout(&self) {
        self.storage.delete(&self.key);
        tracing::info!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// 当前有效会话；不存在、损坏或无效时为 `None`
    pub fn current_user(&self) -> Option<AuthSession> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str::<AuthSession>(&raw) {
            Ok(session) if session.is_valid() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed session");
                None
            }
        }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.current_user().map(|session| session.token)
    }
}
