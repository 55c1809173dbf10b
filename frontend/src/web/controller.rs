//! 控制器服务模块 - 核心引擎
//!
//! 界面状态只由 `ViewState::apply` 修改。组件通过 `dispatch` 发送动作，
//! 返回的命令在这里执行（请求、会话读写），结果再作为动作送回。

use leptos::prelude::*;
use leptos::task::spawn_local;
use levelspro_shared::protocol::ProductQuery;
use levelspro_shared::view::{Action, Command, Screen, ViewState};

use crate::api::Api;
use crate::auth::{self, AuthContext};

/// 控制器服务
///
/// 所有字段都是 `Copy` 的句柄，可以直接传入闭包。
#[derive(Clone, Copy)]
pub struct ControllerService {
    state: RwSignal<ViewState>,
    auth: AuthContext,
    api: StoredValue<Api>,
}

impl ControllerService {
    fn new(auth: AuthContext, api: Api) -> Self {
        Self {
            state: RwSignal::new(ViewState::new()),
            auth,
            api: StoredValue::new(api),
        }
    }

    /// 只读状态信号
    pub fn state(&self) -> ReadSignal<ViewState> {
        self.state.read_only()
    }

    /// 读取状态的一部分（会建立响应式依赖）
    pub fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.state.with(f)
    }

    pub fn image_url(&self, raw: &str) -> String {
        self.api.with_value(|api| api.image_url(raw))
    }

    /// **核心方法：动作 -> 状态更新 -> 命令执行**
    pub fn dispatch(&self, action: Action) {
        let authenticated = self.auth.is_authenticated();
        let commands = self
            .state
            .try_update(|state| state.apply(action, authenticated))
            .unwrap_or_default();

        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        let ctrl = *self;
        let api = self.api.get_value();

        match command {
            Command::FetchCatalog { generation } => spawn_local(async move {
                let result = api.fetch_products(&ProductQuery::default()).await;
                ctrl.dispatch(Action::CatalogLoaded { generation, result });
            }),
            Command::FetchTrending { generation } => spawn_local(async move {
                let result = api.fetch_products(&ProductQuery::trending()).await;
                ctrl.dispatch(Action::TrendingLoaded { generation, result });
            }),
            Command::FetchDashboard { generation } => {
                let session = self.auth.current();
                spawn_local(async move {
                    let result = api
                        .fetch_dashboard(&ProductQuery::default(), session.as_ref())
                        .await;
                    ctrl.dispatch(Action::DashboardLoaded { generation, result });
                });
            }
            Command::Login { username, password } => {
                let auth = self.auth;
                spawn_local(async move {
                    let ok = auth::login(&auth, &api, &username, &password).await;
                    ctrl.dispatch(Action::LoginFinished(ok));
                });
            }
            Command::ClearSession => auth::logout(&self.auth),
            Command::CreateProduct(payload) => {
                let session = self.auth.current();
                spawn_local(async move {
                    let result = api.create_product(&payload, session.as_ref()).await;
                    ctrl.dispatch(Action::ProductCreated(result));
                });
            }
            Command::DeleteProduct(id) => {
                let session = self.auth.current();
                spawn_local(async move {
                    let result = api.delete_product(&id, session.as_ref()).await;
                    if let Err(e) = &result {
                        tracing::warn!(%id, error = %e, "delete failed");
                    }
                    ctrl.dispatch(Action::ProductDeleted(result));
                });
            }
        }
    }
}

/// 创建并提供控制器服务
pub fn provide_controller(auth: AuthContext, api: Api) -> ControllerService {
    let ctrl = ControllerService::new(auth, api);
    provide_context(ctrl);
    ctrl
}

/// 从 Context 获取控制器服务
pub fn use_controller() -> ControllerService {
    use_context::<ControllerService>()
        .expect("ControllerService not found in context. Ensure Controller is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 控制器根组件
///
/// 提供控制器上下文并触发首次加载，应在 App 根部使用。
#[component]
pub fn Controller(
    auth: AuthContext,
    api: Api,
    /// 子组件
    children: Children,
) -> impl IntoView {
    let ctrl = provide_controller(auth, api);
    ctrl.dispatch(Action::Mounted);

    children()
}

/// 页面出口组件
///
/// 只有页面切换时才重新渲染，页面内部的状态变化由各组件自己订阅。
#[component]
pub fn ScreenOutlet(
    /// 页面匹配函数：接收当前页面，返回对应视图
    matcher: fn(Screen) -> AnyView,
) -> impl IntoView {
    let ctrl = use_controller();
    let screen = Memo::new(move |_| ctrl.with(|s| s.screen));

    move || matcher(screen.get())
}
