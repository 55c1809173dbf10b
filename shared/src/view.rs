//! 页面状态机
//!
//! 所有界面状态集中在 `ViewState` 中，只能通过 `apply` 修改。
//! `apply` 不做任何 IO，需要的副作用以 `Command` 返回，由调用方执行，
//! 执行结果再作为 `Action` 送回。

mod remote;
mod screen;

pub use remote::{Notice, Remote};
pub use screen::{DashboardView, NavTarget, Screen};

use crate::catalog::{CategoryFilter, filter_products, most_recent};
use crate::draft::{DraftEdit, DraftError, ImageEntry, ProductDraft};
use crate::error::ApiError;
use crate::{Product, ProductPayload, TRENDING_LIMIT};

#[cfg(test)]
mod tests;

/// 后台首页展示的最近商品数量
pub const RECENT_LISTINGS: usize = 2;

const LOGIN_MISSING_FIELDS: &str = "Please enter username and password";
const LOGIN_FAILED: &str = "Invalid username or password";

// =========================================================
// 动作与命令
// =========================================================

/// 用户操作或异步结果
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Mounted,
    RetryCatalog,
    Navigate(NavTarget),
    SelectProduct(Product),
    Back,
    OpenDashboard,
    SetQuery(String),
    SetCategory(CategoryFilter),
    SubmitLogin { username: String, password: String },
    LoginFinished(bool),
    Logout,
    ShowDashboard(DashboardView),
    RefreshDashboard,
    EditDraft(DraftEdit),
    /// 本地文件读取完成；`draft` 为发起读取时的表单代数
    ImageRead {
        draft: u64,
        index: usize,
        result: Result<ImageEntry, DraftError>,
    },
    SubmitDraft,
    DeleteListing(String),
    DismissNotice,
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    TrendingLoaded {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    DashboardLoaded {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    ProductCreated(Result<Product, ApiError>),
    ProductDeleted(Result<(), ApiError>),
}

/// 需要调用方执行的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchCatalog { generation: u64 },
    FetchTrending { generation: u64 },
    FetchDashboard { generation: u64 },
    Login { username: String, password: String },
    ClearSession,
    CreateProduct(ProductPayload),
    DeleteProduct(String),
}

// =========================================================
// 状态
// =========================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub screen: Screen,
    /// 进入详情页之前的页面，只记录一层
    pub previous: Screen,
    pub selected: Option<Product>,
    pub query: String,
    pub category: CategoryFilter,

    pub catalog: Remote<Vec<Product>>,
    pub trending: Remote<Vec<Product>>,
    pub dashboard: Remote<Vec<Product>>,

    pub dashboard_view: DashboardView,
    pub draft: ProductDraft,
    /// 每次丢弃表单时递增，用于识别过期的文件读取结果
    pub draft_generation: u64,
    pub draft_error: Option<DraftError>,
    pub submitting: bool,
    /// 正在提交的表单代数
    submitted_draft: u64,
    pub deleting: Option<String>,
    pub notice: Option<Notice>,

    pub login_error: Option<String>,
    pub login_pending: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前过滤条件下可见的商品
    pub fn visible_products(&self) -> Vec<Product> {
        filter_products(&self.catalog.data, self.category, &self.query)
    }

    /// 后台首页的最近商品
    pub fn recent_listings(&self) -> Vec<Product> {
        most_recent(&self.dashboard.data, RECENT_LISTINGS)
    }

    /// 底部导航栏中高亮的项
    pub fn active_nav(&self) -> NavTarget {
        let screen = match self.screen {
            Screen::Details => self.previous,
            other => other,
        };
        match screen {
            Screen::Home => NavTarget::Home,
            Screen::Shop => match self.category {
                CategoryFilter::Only(c) if NavTarget::BAR.contains(&NavTarget::Category(c)) => {
                    NavTarget::Category(c)
                }
                _ => NavTarget::Shop,
            },
            _ => NavTarget::Profile,
        }
    }

    /// 处理一个动作，返回需要执行的命令
    ///
    /// 处理完成后，未登录时不会停留在需要登录的页面上。
    pub fn apply(&mut self, action: Action, authenticated: bool) -> Vec<Command> {
        let commands = self.reduce(action, authenticated);
        if self.screen.requires_auth() && !authenticated {
            self.leave_dashboard();
            self.login_error = None;
            self.screen = Screen::Login;
        }
        commands
    }

    fn reduce(&mut self, action: Action, authenticated: bool) -> Vec<Command> {
        match action {
            Action::Mounted | Action::RetryCatalog => self.load_catalog(),
            Action::Navigate(target) => {
                self.navigate(target);
                Vec::new()
            }
            Action::SelectProduct(product) => {
                if self.screen != Screen::Details {
                    self.previous = self.screen;
                }
                self.selected = Some(product);
                self.screen = Screen::Details;
                Vec::new()
            }
            Action::Back => self.back(),
            Action::OpenDashboard => self.open_dashboard(authenticated),
            Action::SetQuery(query) => {
                self.query = query;
                Vec::new()
            }
            Action::SetCategory(category) => {
                self.category = category;
                Vec::new()
            }
            Action::SubmitLogin { username, password } => {
                self.submit_login(username, password)
            }
            Action::LoginFinished(ok) => self.login_finished(ok),
            Action::Logout => {
                self.leave_dashboard();
                self.dashboard.clear();
                self.screen = Screen::Profile;
                vec![Command::ClearSession]
            }
            Action::ShowDashboard(view) => {
                if self.screen == Screen::Dashboard && self.dashboard_view != view {
                    if self.dashboard_view == DashboardView::AddProduct {
                        self.discard_draft();
                    }
                    self.dashboard_view = view;
                }
                Vec::new()
            }
            Action::RefreshDashboard => {
                if self.screen == Screen::Dashboard && authenticated {
                    self.load_dashboard()
                } else {
                    Vec::new()
                }
            }
            Action::EditDraft(edit) => {
                self.draft.apply(edit);
                self.draft_error = None;
                Vec::new()
            }
            Action::ImageRead {
                draft,
                index,
                result,
            } => {
                if !self.editing_draft(draft) {
                    tracing::debug!(draft, latest = self.draft_generation, "discarding stale image read");
                    return Vec::new();
                }
                match result {
                    Ok(entry) => {
                        self.draft.apply(DraftEdit::Image(index, entry));
                        self.draft_error = None;
                    }
                    Err(e) => self.draft_error = Some(e),
                }
                Vec::new()
            }
            Action::SubmitDraft => self.submit_draft(authenticated),
            Action::DeleteListing(id) => self.delete_listing(id, authenticated),
            Action::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
            Action::CatalogLoaded { generation, result } => {
                self.catalog.settle(generation, result);
                Vec::new()
            }
            Action::TrendingLoaded { generation, result } => {
                let limit = TRENDING_LIMIT as usize;
                self.trending.settle(
                    generation,
                    result.map(|mut products| {
                        products.truncate(limit);
                        products
                    }),
                );
                Vec::new()
            }
            Action::DashboardLoaded { generation, result } => {
                self.dashboard.settle(generation, result);
                Vec::new()
            }
            Action::ProductCreated(result) => self.product_created(result, authenticated),
            Action::ProductDeleted(result) => self.product_deleted(result, authenticated),
        }
    }

    // =========================================================
    // 页面切换
    // =========================================================

    fn load_catalog(&mut self) -> Vec<Command> {
        vec![
            Command::FetchCatalog {
                generation: self.catalog.begin(),
            },
            Command::FetchTrending {
                generation: self.trending.begin(),
            },
        ]
    }

    fn load_dashboard(&mut self) -> Vec<Command> {
        vec![Command::FetchDashboard {
            generation: self.dashboard.begin(),
        }]
    }

    fn navigate(&mut self, target: NavTarget) {
        match target {
            NavTarget::Home | NavTarget::Shop => {
                self.category = CategoryFilter::All;
                self.query.clear();
            }
            NavTarget::Category(category) => {
                self.category = CategoryFilter::Only(category);
                self.query.clear();
            }
            NavTarget::Profile => {}
        }
        self.leave_dashboard();
        self.selected = None;
        self.screen = target.screen();
    }

    fn back(&mut self) -> Vec<Command> {
        match self.screen {
            Screen::Details => {
                self.selected = None;
                self.screen = self.previous;
            }
            Screen::Login => {
                self.login_error = None;
                self.screen = Screen::Profile;
            }
            Screen::Dashboard => {
                self.leave_dashboard();
                self.screen = Screen::Profile;
            }
            Screen::Home | Screen::Shop | Screen::Profile => {}
        }
        Vec::new()
    }

    fn open_dashboard(&mut self, authenticated: bool) -> Vec<Command> {
        if !authenticated {
            self.login_error = None;
            self.screen = Screen::Login;
            return Vec::new();
        }
        self.screen = Screen::Dashboard;
        self.dashboard_view = DashboardView::Main;
        self.notice = None;
        self.load_dashboard()
    }

    /// 结果到达时用户仍在后台且已登录
    fn in_dashboard(&self, authenticated: bool) -> bool {
        self.screen == Screen::Dashboard && authenticated
    }

    /// 代数为 `draft` 的表单仍在编辑中
    fn editing_draft(&self, draft: u64) -> bool {
        draft == self.draft_generation
            && self.screen == Screen::Dashboard
            && self.dashboard_view == DashboardView::AddProduct
    }

    /// 离开后台时重置子页面并丢弃未提交的表单
    fn leave_dashboard(&mut self) {
        self.dashboard_view = DashboardView::Main;
        self.notice = None;
        self.discard_draft();
    }

    fn discard_draft(&mut self) {
        self.draft_generation += 1;
        self.draft.reset();
        self.draft_error = None;
    }

    // =========================================================
    // 登录
    // =========================================================

    fn submit_login(&mut self, username: String, password: String) -> Vec<Command> {
        if self.login_pending {
            return Vec::new();
        }
        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            self.login_error = Some(LOGIN_MISSING_FIELDS.to_string());
            return Vec::new();
        }
        self.login_error = None;
        self.login_pending = true;
        vec![Command::Login { username, password }]
    }

    fn login_finished(&mut self, ok: bool) -> Vec<Command> {
        self.login_pending = false;
        if self.screen != Screen::Login {
            return Vec::new();
        }
        if !ok {
            self.login_error = Some(LOGIN_FAILED.to_string());
            return Vec::new();
        }
        self.open_dashboard(true)
    }

    // =========================================================
    // 后台操作
    // =========================================================

    fn submit_draft(&mut self, authenticated: bool) -> Vec<Command> {
        if self.submitting {
            return Vec::new();
        }
        if !authenticated {
            self.screen = Screen::Login;
            return Vec::new();
        }
        match self.draft.validate() {
            Ok(payload) => {
                self.draft_error = None;
                self.submitting = true;
                self.submitted_draft = self.draft_generation;
                vec![Command::CreateProduct(payload)]
            }
            Err(e) => {
                self.draft_error = Some(e);
                Vec::new()
            }
        }
    }

    /// 离开后台或已注销后到达的结果只清除提交标记
    fn product_created(
        &mut self,
        result: Result<Product, ApiError>,
        authenticated: bool,
    ) -> Vec<Command> {
        self.submitting = false;
        if !self.in_dashboard(authenticated) {
            tracing::debug!(ok = result.is_ok(), "create finished outside the dashboard");
            return Vec::new();
        }
        match result {
            Ok(product) => {
                tracing::info!(id = %product.id, "product created");
                // 提交期间表单被取消并重新打开时，保留新的表单
                if self.submitted_draft == self.draft_generation {
                    self.discard_draft();
                    self.dashboard_view = DashboardView::Main;
                }
                self.notice = Some(Notice::success("Product added successfully!"));
                self.load_dashboard()
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                Vec::new()
            }
        }
    }

    fn delete_listing(&mut self, id: String, authenticated: bool) -> Vec<Command> {
        if self.deleting.is_some() {
            return Vec::new();
        }
        if !authenticated {
            self.screen = Screen::Login;
            return Vec::new();
        }
        self.deleting = Some(id.clone());
        vec![Command::DeleteProduct(id)]
    }

    fn product_deleted(&mut self, result: Result<(), ApiError>, authenticated: bool) -> Vec<Command> {
        self.deleting = None;
        if !self.in_dashboard(authenticated) {
            tracing::debug!(ok = result.is_ok(), "delete finished outside the dashboard");
            return Vec::new();
        }
        match result {
            Ok(()) => {
                self.notice = Some(Notice::success("Product deleted successfully!"));
                self.load_dashboard()
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                Vec::new()
            }
        }
    }
}
