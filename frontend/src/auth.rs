//! 认证模块
//!
//! 会话在启动时从 LocalStorage 读取一次，之后保存在上下文中；
//! 需要鉴权的请求从上下文取会话，不再到处读存储。

use crate::api::Api;
use crate::web::LocalStorage;
use leptos::prelude::*;
use levelspro_shared::auth::{AuthSession, AuthStore};

/// 认证上下文
///
/// 通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（未登录时为 `None`）
    pub session: RwSignal<Option<AuthSession>>,
    storage_key: StoredValue<String>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(storage_key: &str) -> Self {
        Self {
            session: RwSignal::new(None),
            storage_key: StoredValue::new(storage_key.to_string()),
        }
    }

    fn store(&self) -> AuthStore<LocalStorage> {
        AuthStore::new(LocalStorage, self.storage_key.get_value())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with_untracked(|s| s.is_some())
    }

    /// 当前会话的快照
    pub fn current(&self) -> Option<AuthSession> {
        self.session.get_untracked()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 加载会话，损坏或无效的会话视为未登录。
pub fn init_auth(ctx: &AuthContext) {
    let session = ctx.store().current_user();
    tracing::debug!(restored = session.is_some(), "session loaded");
    ctx.session.set(session);
}

/// 登录并保存会话
///
/// # Returns
/// 登录是否成功
pub async fn login(ctx: &AuthContext, api: &Api, username: &str, password: &str) -> bool {
    let store = ctx.store();
    if !store.login(api, username, password).await {
        return false;
    }
    ctx.session.set(store.current_user());
    ctx.is_authenticated()
}

/// 注销并清除会话
pub fn logout(ctx: &AuthContext) {
    ctx.store().logout();
    ctx.session.set(None);
}
