use crate::auth::use_auth;
use crate::components::add_product_form::AddProductForm;
use crate::components::icons::*;
use crate::components::product_card::ProductImage;
use crate::web::controller::{ControllerService, use_controller};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use levelspro_shared::Product;
use levelspro_shared::view::{Action, DashboardView};

/// 成功提示自动消失的时间
const NOTICE_DISMISS_MS: u32 = 3_000;

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Delete \"{}\"? This cannot be undone.", name))
                .ok()
        })
        .unwrap_or(false)
}

/// 提示框：错误需要手动关闭，成功提示 3 秒后自动消失
#[component]
fn NoticeToast() -> impl IntoView {
    let ctrl = use_controller();
    let notice = Memo::new(move |_| ctrl.with(|s| s.notice.clone()));

    Effect::new(move |_| {
        if let Some(shown) = notice.get().filter(|n| !n.is_error) {
            Timeout::new(NOTICE_DISMISS_MS, move || {
                // 期间出现了新的提示则保留
                let unchanged = ctrl
                    .state()
                    .with_untracked(|s| s.notice.as_ref() == Some(&shown));
                if unchanged {
                    ctrl.dispatch(Action::DismissNotice);
                }
            })
            .forget();
        }
    });

    move || {
        notice.get().map(|n| {
            let class = if n.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-center z-50">
                    <div role="alert" class=class>
                        <span>{n.message}</span>
                        <button class="btn btn-xs btn-ghost" on:click=move |_| ctrl.dispatch(Action::DismissNotice)>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

/// 单行商品，可选删除按钮
#[component]
fn ListingRow(product: Product, #[prop(optional)] deletable: bool) -> impl IntoView {
    let ctrl = use_controller();
    let cover = product.cover_image().map(|url| ctrl.image_url(url));
    let id = product.id.clone();
    let name = product.name.clone();
    let is_deleting = {
        let id = id.clone();
        move || ctrl.with(|s| s.deleting.as_deref() == Some(id.as_str()))
    };

    let on_delete = {
        let name = name.clone();
        move |_: leptos::ev::MouseEvent| {
            if confirm_delete(&name) {
                ctrl.dispatch(Action::DeleteListing(id.clone()));
            }
        }
    };

    view! {
        <li class="flex items-center gap-3 py-2">
            <ProductImage src=cover alt=name.clone() frame="w-12 h-12 rounded-lg shrink-0" />
            <div class="flex-1 min-w-0">
                <p class="text-sm font-medium truncate">{name}</p>
                <p class="text-xs text-neutral-500">{product.category.label()} " · " {product.price.clone()}</p>
            </div>
            <Show when=move || deletable>
                <button
                    class="btn btn-sm btn-ghost btn-square text-red-400"
                    disabled=is_deleting.clone()
                    on:click=on_delete.clone()
                    aria-label="Delete product"
                >
                    <Trash2 attr:class="w-4 h-4" />
                </button>
            </Show>
        </li>
    }
}

/// 加载中 / 错误 / 空列表
fn dashboard_status(ctrl: ControllerService) -> impl IntoView {
    move || {
        ctrl.with(|s| {
            if s.dashboard.loading && s.dashboard.data.is_empty() {
                Some(
                    view! {
                        <p class="py-6 text-center text-sm text-neutral-500">
                            <span class="loading loading-spinner loading-sm"></span> " Loading..."
                        </p>
                    }
                    .into_any(),
                )
            } else if let Some(error) = s.dashboard.error.clone() {
                Some(view! { <p class="py-6 text-center text-sm text-red-400">{error}</p> }.into_any())
            } else if s.dashboard.data.is_empty() {
                Some(
                    view! {
                        <p class="py-6 text-center text-sm text-neutral-500">
                            "No products yet. Add one to get started."
                        </p>
                    }
                    .into_any(),
                )
            } else {
                None
            }
        })
    }
}

#[component]
fn DashboardMain() -> impl IntoView {
    let ctrl = use_controller();
    let recent = Memo::new(move |_| ctrl.with(|s| s.recent_listings()));
    let total = move || ctrl.with(|s| s.dashboard.data.len());

    view! {
        <div class="grid grid-cols-2 gap-3">
            <button
                class="btn h-auto py-4 flex-col bg-neutral-900 border-neutral-800"
                on:click=move |_| ctrl.dispatch(Action::ShowDashboard(DashboardView::ViewProducts))
            >
                <Package attr:class="w-6 h-6 text-green-500" />
                "View Products"
                <span class="badge badge-neutral">{total}</span>
            </button>
            <button
                class="btn h-auto py-4 flex-col bg-neutral-900 border-neutral-800"
                on:click=move |_| ctrl.dispatch(Action::ShowDashboard(DashboardView::AddProduct))
            >
                <Plus attr:class="w-6 h-6 text-green-500" />
                "Add Product"
            </button>
        </div>

        <section class="card bg-neutral-900 border border-neutral-800">
            <div class="card-body p-4">
                <h3 class="text-sm font-semibold">"Recent listings"</h3>
                {dashboard_status(ctrl)}
                <ul class="divide-y divide-neutral-800">
                    <For
                        each=move || recent.get()
                        key=|p| p.id.clone()
                        children=|product| view! { <ListingRow product=product /> }
                    />
                </ul>
            </div>
        </section>
    }
}

#[component]
fn DashboardProducts() -> impl IntoView {
    let ctrl = use_controller();
    let products = Memo::new(move |_| ctrl.with(|s| s.dashboard.data.clone()));
    let loading = move || ctrl.with(|s| s.dashboard.loading);

    view! {
        <section class="card bg-neutral-900 border border-neutral-800">
            <div class="card-body p-4">
                <div class="flex items-center justify-between">
                    <button
                        class="flex items-center gap-2 text-sm text-neutral-300"
                        on:click=move |_| ctrl.dispatch(Action::ShowDashboard(DashboardView::Main))
                    >
                        <ArrowLeft attr:class="w-4 h-4" />
                        "My Products"
                    </button>
                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        disabled=loading
                        on:click=move |_| ctrl.dispatch(Action::RefreshDashboard)
                        aria-label="Refresh"
                    >
                        <RefreshCw attr:class=move || if loading() { "h-4 w-4 animate-spin" } else { "h-4 w-4" } />
                    </button>
                </div>
                {dashboard_status(ctrl)}
                <ul class="divide-y divide-neutral-800">
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=|product| view! { <ListingRow product=product deletable=true /> }
                    />
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctrl = use_controller();
    let auth = use_auth();
    let sub_view = Memo::new(move |_| ctrl.with(|s| s.dashboard_view));
    let username = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    };

    view! {
        <main class="flex-1 px-4 py-4 pb-24 space-y-4">
            <NoticeToast />

            <div class="flex items-center justify-between">
                <button class="flex items-center gap-2 text-sm text-neutral-300" on:click=move |_| ctrl.dispatch(Action::Back)>
                    <ArrowLeft attr:class="w-4 h-4" />
                    "Back"
                </button>
                <button on:click=move |_| ctrl.dispatch(Action::Logout) class="btn btn-sm btn-outline btn-error gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>

            <div>
                <h2 class="text-xl font-semibold">"Dashboard"</h2>
                <p class="text-sm text-neutral-400">"Signed in as " {username}</p>
            </div>

            {move || match sub_view.get() {
                DashboardView::Main => view! { <DashboardMain /> }.into_any(),
                DashboardView::ViewProducts => view! { <DashboardProducts /> }.into_any(),
                DashboardView::AddProduct => view! { <AddProductForm /> }.into_any(),
            }}
        </main>
    }
}
