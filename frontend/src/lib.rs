//! LevelsPro 商店前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::controller`: 控制器服务（执行状态机返回的命令）
//! - `auth`: 会话上下文
//! - `components`: UI 组件层
//!
//! 所有页面状态与业务规则位于 `levelspro-shared`，这里只负责渲染与浏览器 API。

mod api;
mod auth;
mod components {
    mod add_product_form;
    pub mod catalog;
    pub mod dashboard;
    pub mod details;
    mod icons;
    pub mod layout;
    pub mod login;
    mod product_card;
    pub mod profile;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::catalog::{HomePage, ShopPage};
use crate::components::dashboard::DashboardPage;
use crate::components::details::DetailsPage;
use crate::components::layout::{BottomNav, Header};
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;

use leptos::prelude::*;
use levelspro_shared::config::ClientConfig;
use levelspro_shared::view::Screen;

// 浏览器 API 适配层
// 为共享层定义的 trait 提供浏览器实现，所有 web_sys 调用集中在此。
pub(crate) mod web {
    pub mod controller;
    pub mod file;
    mod http;
    mod storage;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::controller::{Controller, ScreenOutlet};

/// 页面匹配函数
///
/// 根据 Screen 枚举返回对应的视图组件。
fn screen_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Home => view! { <HomePage /> }.into_any(),
        Screen::Shop => view! { <ShopPage /> }.into_any(),
        Screen::Details => view! { <DetailsPage /> }.into_any(),
        Screen::Profile => view! { <ProfilePage /> }.into_any(),
        Screen::Dashboard => view! { <DashboardPage /> }.into_any(),
        Screen::Login => view! { <LoginPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建时配置
    let config = ClientConfig::from_build_env();
    provide_context(config.clone());

    // 2. 创建认证上下文并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new(&config.auth_storage_key);
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 创建 API 客户端，注入控制器
    let api = api::create_api(&config);

    view! {
        <Controller auth=auth_ctx api=api>
            <div class="min-h-screen bg-neutral-950 text-neutral-100 flex flex-col">
                <Header />
                <ScreenOutlet matcher=screen_matcher />
                <BottomNav />
            </div>
        </Controller>
    }
}
