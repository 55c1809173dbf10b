use crate::Category;

/// 顶层页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Shop,
    Details,
    Profile,
    Dashboard,
    Login,
}

impl Screen {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Dashboard)
    }

    /// 顶部搜索框与分类标签只在列表页显示
    pub fn shows_catalog_controls(&self) -> bool {
        matches!(self, Screen::Home | Screen::Shop)
    }
}

/// 后台子页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardView {
    #[default]
    Main,
    ViewProducts,
    AddProduct,
}

/// 底部导航栏的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Category(Category),
    Shop,
    Profile,
}

impl NavTarget {
    /// 导航栏从左到右的顺序
    pub const BAR: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::Category(Category::Laptops),
        NavTarget::Category(Category::GamingPcs),
        NavTarget::Shop,
        NavTarget::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Category(Category::GamingPcs) => "Gaming",
            NavTarget::Category(category) => category.label(),
            NavTarget::Shop => "Shop",
            NavTarget::Profile => "Profile",
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            NavTarget::Home => Screen::Home,
            NavTarget::Category(_) | NavTarget::Shop => Screen::Shop,
            NavTarget::Profile => Screen::Profile,
        }
    }
}
