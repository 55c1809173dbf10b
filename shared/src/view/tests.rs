use super::*;
use crate::Category;
use crate::draft::ImageEntry;

// =========================================================
// 辅助函数
// =========================================================

fn product(id: &str, name: &str, category: Category) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price: "100,000 TZS".to_string(),
        specs: vec!["spec a".to_string(), "spec b".to_string()],
        warranty: "3 Months".to_string(),
        image_urls: vec![format!("http://h/{}.jpg", id)],
        created_at: None,
        updated_at: None,
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("1", "HP EliteBook 840", Category::Laptops),
        product("2", "Custom Gaming PC", Category::GamingPcs),
        product("3", "hp Z2 Mini", Category::Desktops),
        product("4", "Wireless Mouse", Category::Accessories),
    ]
}

/// 挂载并加载目录
fn loaded() -> ViewState {
    let mut state = ViewState::new();
    let commands = state.apply(Action::Mounted, false);
    let (catalog_gen, trending_gen) = match commands.as_slice() {
        [
            Command::FetchCatalog { generation: c },
            Command::FetchTrending { generation: t },
        ] => (*c, *t),
        other => panic!("unexpected commands: {:?}", other),
    };
    state.apply(
        Action::CatalogLoaded {
            generation: catalog_gen,
            result: Ok(catalog()),
        },
        false,
    );
    state.apply(
        Action::TrendingLoaded {
            generation: trending_gen,
            result: Ok(catalog()),
        },
        false,
    );
    state
}

fn dashboard_generation(commands: &[Command]) -> u64 {
    match commands {
        [Command::FetchDashboard { generation }] => *generation,
        other => panic!("expected a dashboard fetch, got {:?}", other),
    }
}

fn in_dashboard() -> ViewState {
    let mut state = loaded();
    state.apply(Action::Navigate(NavTarget::Profile), true);
    let commands = state.apply(Action::OpenDashboard, true);
    let generation = dashboard_generation(&commands);
    state.apply(
        Action::DashboardLoaded {
            generation,
            result: Ok(catalog()),
        },
        true,
    );
    state
}

fn upload(data_url: &str) -> ImageEntry {
    ImageEntry::Upload {
        data_url: data_url.to_string(),
        file_name: "photo.png".to_string(),
    }
}

// =========================================================
// 加载测试
// =========================================================

#[test]
fn test_mount_loads_catalog_and_trending_independently() {
    let state = loaded();
    assert_eq!(state.catalog.data.len(), 4);
    assert_eq!(state.trending.data.len(), 4);
    assert!(!state.catalog.loading);
    assert!(state.catalog.error.is_none());
}

#[test]
fn test_trending_is_bounded() {
    let mut state = ViewState::new();
    state.apply(Action::Mounted, false);
    let many: Vec<Product> = (0..10)
        .map(|i| product(&i.to_string(), "P", Category::Laptops))
        .collect();
    state.apply(
        Action::TrendingLoaded {
            generation: state.trending.latest_generation(),
            result: Ok(many),
        },
        false,
    );
    assert_eq!(state.trending.data.len(), TRENDING_LIMIT as usize);
}

#[test]
fn test_fetch_failure_sets_error_and_retry_reissues() {
    let mut state = ViewState::new();
    state.apply(Action::Mounted, false);
    state.apply(
        Action::CatalogLoaded {
            generation: 1,
            result: Err(ApiError::Network("offline".to_string())),
        },
        false,
    );
    assert_eq!(
        state.catalog.error.as_deref(),
        Some("Network error: offline")
    );
    assert!(!state.catalog.loading);

    let commands = state.apply(Action::RetryCatalog, false);
    assert_eq!(
        commands,
        vec![
            Command::FetchCatalog { generation: 2 },
            Command::FetchTrending { generation: 2 },
        ]
    );
    assert!(state.catalog.loading);
    assert!(state.catalog.error.is_none());
}

#[test]
fn test_stale_response_is_discarded() {
    let mut state = ViewState::new();
    state.apply(Action::Mounted, false);
    state.apply(Action::RetryCatalog, false);

    // 第二次请求先返回
    state.apply(
        Action::CatalogLoaded {
            generation: 2,
            result: Ok(catalog()),
        },
        false,
    );
    state.apply(
        Action::CatalogLoaded {
            generation: 1,
            result: Ok(vec![]),
        },
        false,
    );
    assert_eq!(state.catalog.data.len(), 4);
}

// =========================================================
// 过滤测试
// =========================================================

#[test]
fn test_search_hp_with_all() {
    let mut state = loaded();
    state.apply(Action::SetQuery("HP".to_string()), false);
    let names: Vec<_> = state
        .visible_products()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["HP EliteBook 840", "hp Z2 Mini"]);
}

#[test]
fn test_home_and_shop_reset_filters() {
    let mut state = loaded();
    state.apply(Action::SetCategory(Category::Desktops.into()), false);
    state.apply(Action::SetQuery("hp".to_string()), false);
    assert_eq!(state.visible_products().len(), 1);

    state.apply(Action::Navigate(NavTarget::Shop), false);
    assert_eq!(state.screen, Screen::Shop);
    assert_eq!(state.category, CategoryFilter::All);
    assert!(state.query.is_empty());

    state.apply(Action::SetQuery("x".to_string()), false);
    state.apply(Action::Navigate(NavTarget::Home), false);
    assert!(state.query.is_empty());
}

#[test]
fn test_category_shortcut_opens_shop() {
    let mut state = loaded();
    state.apply(Action::SetQuery("mouse".to_string()), false);
    state.apply(
        Action::Navigate(NavTarget::Category(Category::GamingPcs)),
        false,
    );
    assert_eq!(state.screen, Screen::Shop);
    assert_eq!(state.category, CategoryFilter::Only(Category::GamingPcs));
    assert!(state.query.is_empty());
    assert_eq!(state.visible_products().len(), 1);
    assert_eq!(
        state.active_nav(),
        NavTarget::Category(Category::GamingPcs)
    );
}

#[test]
fn test_active_nav() {
    let mut state = loaded();
    assert_eq!(state.active_nav(), NavTarget::Home);

    state.apply(Action::Navigate(NavTarget::Shop), false);
    state.apply(Action::SetCategory(Category::Desktops.into()), false);
    assert_eq!(state.active_nav(), NavTarget::Shop);

    state.apply(Action::SelectProduct(catalog()[2].clone()), false);
    assert_eq!(state.active_nav(), NavTarget::Shop);

    state.apply(Action::Navigate(NavTarget::Profile), false);
    state.apply(Action::OpenDashboard, false);
    assert_eq!(state.active_nav(), NavTarget::Profile);
}

// =========================================================
// 详情页与返回测试
// =========================================================

#[test]
fn test_back_from_details_returns_to_home() {
    let mut state = loaded();
    let chosen = catalog()[1].clone();
    state.apply(Action::SelectProduct(chosen.clone()), false);
    assert_eq!(state.screen, Screen::Details);
    assert_eq!(state.selected.as_ref(), Some(&chosen));

    state.apply(Action::Back, false);
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.selected, None);
}

#[test]
fn test_back_from_details_returns_to_shop() {
    let mut state = loaded();
    state.apply(Action::Navigate(NavTarget::Profile), false);
    state.apply(Action::Navigate(NavTarget::Shop), false);
    state.apply(Action::SelectProduct(catalog()[0].clone()), false);
    state.apply(Action::Back, false);
    assert_eq!(state.screen, Screen::Shop);
}

#[test]
fn test_selecting_inside_details_keeps_previous() {
    let mut state = loaded();
    state.apply(Action::Navigate(NavTarget::Shop), false);
    state.apply(Action::SelectProduct(catalog()[0].clone()), false);
    state.apply(Action::SelectProduct(catalog()[1].clone()), false);
    state.apply(Action::Back, false);
    assert_eq!(state.screen, Screen::Shop);
}

#[test]
fn test_nav_click_leaves_details() {
    let mut state = loaded();
    state.apply(Action::SelectProduct(catalog()[0].clone()), false);
    state.apply(Action::Navigate(NavTarget::Profile), false);
    assert_eq!(state.screen, Screen::Profile);
    assert_eq!(state.selected, None);
}

#[test]
fn test_back_is_noop_on_top_level_screens() {
    let mut state = loaded();
    for target in [NavTarget::Home, NavTarget::Shop, NavTarget::Profile] {
        state.apply(Action::Navigate(target), false);
        let before = state.clone();
        assert!(state.apply(Action::Back, false).is_empty());
        assert_eq!(state, before);
    }
}

// =========================================================
// 登录与后台门禁测试
// =========================================================

#[test]
fn test_dashboard_redirects_to_login_when_logged_out() {
    let mut state = loaded();
    state.apply(Action::Navigate(NavTarget::Profile), false);
    let commands = state.apply(Action::OpenDashboard, false);
    assert!(commands.is_empty());
    assert_eq!(state.screen, Screen::Login);

    state.apply(Action::Back, false);
    assert_eq!(state.screen, Screen::Profile);
}

#[test]
fn test_login_success_opens_dashboard() {
    let mut state = loaded();
    state.apply(Action::OpenDashboard, false);

    let commands = state.apply(
        Action::SubmitLogin {
            username: " levels ".to_string(),
            password: "secret".to_string(),
        },
        false,
    );
    assert_eq!(
        commands,
        vec![Command::Login {
            username: "levels".to_string(),
            password: "secret".to_string(),
        }]
    );
    assert!(state.login_pending);

    let commands = state.apply(Action::LoginFinished(true), true);
    dashboard_generation(&commands);
    assert_eq!(state.screen, Screen::Dashboard);
    assert_eq!(state.dashboard_view, DashboardView::Main);
    assert!(!state.login_pending);
}

#[test]
fn test_login_failure_stays_on_login() {
    let mut state = loaded();
    state.apply(Action::OpenDashboard, false);
    state.apply(
        Action::SubmitLogin {
            username: "levels".to_string(),
            password: "wrong".to_string(),
        },
        false,
    );
    assert!(state.apply(Action::LoginFinished(false), false).is_empty());
    assert_eq!(state.screen, Screen::Login);
    assert_eq!(state.login_error.as_deref(), Some(LOGIN_FAILED));
}

#[test]
fn test_login_requires_both_fields() {
    let mut state = loaded();
    state.apply(Action::OpenDashboard, false);
    let commands = state.apply(
        Action::SubmitLogin {
            username: "levels".to_string(),
            password: String::new(),
        },
        false,
    );
    assert!(commands.is_empty());
    assert_eq!(state.login_error.as_deref(), Some(LOGIN_MISSING_FIELDS));
}

#[test]
fn test_late_login_result_does_not_move_user() {
    let mut state = loaded();
    state.apply(Action::OpenDashboard, false);
    state.apply(
        Action::SubmitLogin {
            username: "levels".to_string(),
            password: "secret".to_string(),
        },
        false,
    );
    state.apply(Action::Navigate(NavTarget::Home), false);
    assert!(state.apply(Action::LoginFinished(true), true).is_empty());
    assert_eq!(state.screen, Screen::Home);
    assert!(!state.login_pending);
}

#[test]
fn test_logout_clears_session_and_returns_to_profile() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::ViewProducts), true);

    let commands = state.apply(Action::Logout, true);
    assert_eq!(commands, vec![Command::ClearSession]);
    assert_eq!(state.screen, Screen::Profile);
    assert_eq!(state.dashboard_view, DashboardView::Main);
    assert!(state.dashboard.data.is_empty());
}

#[test]
fn test_back_from_dashboard_discards_draft() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(Action::EditDraft(DraftEdit::Name("X".to_string())), true);

    state.apply(Action::Back, true);
    assert_eq!(state.screen, Screen::Profile);
    assert_eq!(state.draft, ProductDraft::default());
    assert_eq!(state.dashboard_view, DashboardView::Main);
}

// =========================================================
// 后台操作测试
// =========================================================

#[test]
fn test_recent_listings_in_main() {
    let mut state = in_dashboard();
    let mut newer = product("9", "Newest", Category::Laptops);
    newer.created_at = Some("2025-05-01T00:00:00Z".to_string());
    let mut older = product("8", "Older", Category::Laptops);
    older.created_at = Some("2025-01-01T00:00:00Z".to_string());
    let generation = state.dashboard.begin();
    state.apply(
        Action::DashboardLoaded {
            generation,
            result: Ok(vec![older, product("7", "Undated", Category::Laptops), newer]),
        },
        true,
    );

    let recent: Vec<_> = state.recent_listings().into_iter().map(|p| p.id).collect();
    assert_eq!(recent, vec!["9", "8"]);
}

#[test]
fn test_dashboard_unauthorized_message() {
    let mut state = loaded();
    let generation = dashboard_generation(&state.apply(Action::OpenDashboard, true));
    state.apply(
        Action::DashboardLoaded {
            generation,
            result: Err(ApiError::Unauthorized),
        },
        true,
    );
    assert_eq!(
        state.dashboard.error.as_deref(),
        Some("Authentication required. Please login again.")
    );
}

#[test]
fn test_submit_empty_name_issues_no_command() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(
        Action::EditDraft(DraftEdit::Image(0, upload("data:image/png;base64,QQ=="))),
        true,
    );
    state.apply(Action::EditDraft(DraftEdit::Price("1 TZS".to_string())), true);

    assert!(state.apply(Action::SubmitDraft, true).is_empty());
    assert_eq!(state.draft_error, Some(DraftError::MissingName));
    assert!(!state.submitting);
}

#[test]
fn test_submit_without_images_issues_no_command() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(Action::EditDraft(DraftEdit::Name("Mouse".to_string())), true);
    state.apply(Action::EditDraft(DraftEdit::Price("1 TZS".to_string())), true);
    state.apply(Action::EditDraft(DraftEdit::AddImage), true);

    assert!(state.apply(Action::SubmitDraft, true).is_empty());
    assert_eq!(state.draft_error, Some(DraftError::MissingImage));
}

#[test]
fn test_edit_clears_draft_error() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(
        Action::ImageRead {
            draft: state.draft_generation,
            index: 0,
            result: Err(DraftError::TooLarge("big.png".to_string())),
        },
        true,
    );
    assert!(state.draft_error.is_some());
    state.apply(Action::EditDraft(DraftEdit::Name("A".to_string())), true);
    assert!(state.draft_error.is_none());
}

#[test]
fn test_add_product_flow() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    for edit in [
        DraftEdit::Name("Dell OptiPlex 7080".to_string()),
        DraftEdit::Category(Category::Desktops),
        DraftEdit::Price("780,000 TZS".to_string()),
        DraftEdit::Spec(0, "i7".to_string()),
        DraftEdit::Image(0, upload("data:image/png;base64,aGVsbG8=")),
    ] {
        state.apply(Action::EditDraft(edit), true);
    }

    let commands = state.apply(Action::SubmitDraft, true);
    let payload = match commands.as_slice() {
        [Command::CreateProduct(payload)] => payload.clone(),
        other => panic!("expected create, got {:?}", other),
    };
    assert_eq!(payload.images_data, vec!["aGVsbG8=".to_string()]);
    assert_eq!(payload.category, Category::Desktops);
    assert!(state.submitting);

    // 提交中重复点击无效
    assert!(state.apply(Action::SubmitDraft, true).is_empty());

    let created = product("10", "Dell OptiPlex 7080", Category::Desktops);
    let commands = state.apply(Action::ProductCreated(Ok(created)), true);
    dashboard_generation(&commands);
    assert!(!state.submitting);
    assert_eq!(state.draft, ProductDraft::default());
    assert_eq!(state.dashboard_view, DashboardView::Main);
    assert_eq!(
        state.notice,
        Some(Notice::success("Product added successfully!"))
    );
}

#[test]
fn test_create_failure_keeps_draft() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(Action::EditDraft(DraftEdit::Name("A".to_string())), true);
    state.apply(Action::EditDraft(DraftEdit::Price("1".to_string())), true);
    state.apply(
        Action::EditDraft(DraftEdit::Image(0, upload("data:image/png;base64,QQ=="))),
        true,
    );
    state.apply(Action::SubmitDraft, true);

    let commands = state.apply(
        Action::ProductCreated(Err(ApiError::status(400, "Invalid image data"))),
        true,
    );
    assert!(commands.is_empty());
    assert_eq!(state.draft.name, "A");
    assert_eq!(state.dashboard_view, DashboardView::AddProduct);
    assert_eq!(state.notice, Some(Notice::error("Invalid image data")));

    state.apply(Action::DismissNotice, true);
    assert_eq!(state.notice, None);
}

#[test]
fn test_switching_subview_discards_draft() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(Action::EditDraft(DraftEdit::Name("A".to_string())), true);
    state.apply(Action::ShowDashboard(DashboardView::Main), true);
    assert_eq!(state.draft, ProductDraft::default());
}

#[test]
fn test_delete_flow_refetches() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::ViewProducts), true);

    let commands = state.apply(Action::DeleteListing("2".to_string()), true);
    assert_eq!(commands, vec![Command::DeleteProduct("2".to_string())]);
    assert_eq!(state.deleting.as_deref(), Some("2"));

    let commands = state.apply(Action::ProductDeleted(Ok(())), true);
    dashboard_generation(&commands);
    assert_eq!(state.deleting, None);
    assert_eq!(state.dashboard_view, DashboardView::ViewProducts);
}

#[test]
fn test_delete_failure_surfaces_server_text() {
    let mut state = in_dashboard();
    state.apply(Action::DeleteListing("2".to_string()), true);
    let commands = state.apply(
        Action::ProductDeleted(Err(ApiError::status(
            403,
            "You can only delete your own products",
        ))),
        true,
    );
    assert!(commands.is_empty());
    assert_eq!(
        state.notice,
        Some(Notice::error("You can only delete your own products"))
    );
}

#[test]
fn test_actions_without_session_redirect_to_login() {
    let mut state = in_dashboard();
    assert!(state.apply(Action::DeleteListing("2".to_string()), false).is_empty());
    assert_eq!(state.screen, Screen::Login);
}

#[test]
fn test_refresh_dashboard_only_inside_dashboard() {
    let mut state = in_dashboard();
    let before = state.dashboard.latest_generation();
    let generation = dashboard_generation(&state.apply(Action::RefreshDashboard, true));
    assert_eq!(generation, before + 1);
    assert!(state.dashboard.loading);

    state.apply(Action::Back, true);
    assert!(state.apply(Action::RefreshDashboard, true).is_empty());
}

#[test]
fn test_dashboard_response_after_logout_is_discarded() {
    let mut state = in_dashboard();
    let generation = dashboard_generation(&state.apply(Action::RefreshDashboard, true));
    state.apply(Action::Logout, true);

    state.apply(
        Action::DashboardLoaded {
            generation,
            result: Ok(catalog()),
        },
        false,
    );
    assert!(state.dashboard.data.is_empty());
    assert!(!state.dashboard.loading);
}

#[test]
fn test_dashboard_is_left_when_session_disappears() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);

    state.apply(Action::DismissNotice, false);
    assert_eq!(state.screen, Screen::Login);
    assert_eq!(state.dashboard_view, DashboardView::Main);
}

/// 打开新增表单并填好必填字段
fn submittable(state: &mut ViewState) {
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    for edit in [
        DraftEdit::Name("Dell OptiPlex 7080".to_string()),
        DraftEdit::Price("780,000 TZS".to_string()),
        DraftEdit::Image(0, upload("data:image/png;base64,aGVsbG8=")),
    ] {
        state.apply(Action::EditDraft(edit), true);
    }
}

#[test]
fn test_submit_with_image_link_sends_only_uploads() {
    let mut state = in_dashboard();
    submittable(&mut state);
    state.apply(Action::EditDraft(DraftEdit::AddImage), true);
    state.apply(
        Action::EditDraft(DraftEdit::Image(
            1,
            ImageEntry::Remote("https://cdn/x.jpg".to_string()),
        )),
        true,
    );

    let commands = state.apply(Action::SubmitDraft, true);
    match commands.as_slice() {
        [Command::CreateProduct(payload)] => {
            assert_eq!(payload.images_data, vec!["aGVsbG8=".to_string()]);
        }
        other => panic!("expected create, got {:?}", other),
    }
    assert_eq!(state.draft_error, None);
}

#[test]
fn test_create_result_after_logout_is_ignored() {
    let mut state = in_dashboard();
    submittable(&mut state);
    state.apply(Action::SubmitDraft, true);
    state.apply(Action::Logout, true);

    let created = product("10", "Dell OptiPlex 7080", Category::Desktops);
    let commands = state.apply(Action::ProductCreated(Ok(created)), false);
    assert!(commands.is_empty());
    assert_eq!(state.screen, Screen::Profile);
    assert_eq!(state.notice, None);
    assert!(!state.submitting);

    // 重新登录后不会看到过期的提示
    state.apply(Action::OpenDashboard, true);
    assert_eq!(state.notice, None);
}

#[test]
fn test_delete_result_after_leaving_dashboard_is_ignored() {
    let mut state = in_dashboard();
    state.apply(Action::DeleteListing("2".to_string()), true);
    state.apply(Action::Back, true);

    let commands = state.apply(Action::ProductDeleted(Ok(())), true);
    assert!(commands.is_empty());
    assert_eq!(state.deleting, None);
    assert_eq!(state.notice, None);
}

#[test]
fn test_open_dashboard_clears_previous_notice() {
    let mut state = in_dashboard();
    state.apply(Action::DeleteListing("2".to_string()), true);
    state.apply(Action::ProductDeleted(Ok(())), true);
    assert!(state.notice.is_some());

    state.apply(Action::Back, true);
    state.apply(Action::OpenDashboard, true);
    assert_eq!(state.notice, None);
}

#[test]
fn test_create_keeps_draft_reopened_during_submit() {
    let mut state = in_dashboard();
    submittable(&mut state);
    state.apply(Action::SubmitDraft, true);

    state.apply(Action::ShowDashboard(DashboardView::Main), true);
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    state.apply(Action::EditDraft(DraftEdit::Name("Next".to_string())), true);

    let created = product("10", "Dell OptiPlex 7080", Category::Desktops);
    dashboard_generation(&state.apply(Action::ProductCreated(Ok(created)), true));
    assert_eq!(state.dashboard_view, DashboardView::AddProduct);
    assert_eq!(state.draft.name, "Next");
    assert_eq!(
        state.notice,
        Some(Notice::success("Product added successfully!"))
    );
}

#[test]
fn test_image_read_lands_in_open_draft() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    let draft = state.draft_generation;

    state.apply(
        Action::ImageRead {
            draft,
            index: 0,
            result: Ok(upload("data:image/png;base64,QQ==")),
        },
        true,
    );
    assert_eq!(state.draft.images, vec![upload("data:image/png;base64,QQ==")]);

    state.apply(
        Action::ImageRead {
            draft,
            index: 0,
            result: Err(DraftError::TooLarge("big.png".to_string())),
        },
        true,
    );
    assert_eq!(
        state.draft_error,
        Some(DraftError::TooLarge("big.png".to_string()))
    );
}

#[test]
fn test_image_read_for_discarded_draft_is_dropped() {
    let mut state = in_dashboard();
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);
    let draft = state.draft_generation;

    // 取消后重新打开表单
    state.apply(Action::ShowDashboard(DashboardView::Main), true);
    state.apply(Action::ShowDashboard(DashboardView::AddProduct), true);

    state.apply(
        Action::ImageRead {
            draft,
            index: 0,
            result: Ok(upload("data:image/png;base64,QQ==")),
        },
        true,
    );
    assert_eq!(state.draft, ProductDraft::default());
    assert_eq!(state.draft_error, None);
}
