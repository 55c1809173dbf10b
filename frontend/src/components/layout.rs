//! 页面外框：顶部栏、分类标签、底部导航

use crate::components::icons::*;
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::catalog::CategoryFilter;
use levelspro_shared::config::ClientConfig;
use levelspro_shared::view::{Action, NavTarget};

/// 顶部栏：店名、WhatsApp 入口、搜索框
#[component]
pub fn Header() -> impl IntoView {
    let ctrl = use_controller();
    let config = expect_context::<ClientConfig>();
    let chat_link = format!("https://wa.me/{}", config.whatsapp_number);

    let show_search = Memo::new(move |_| ctrl.with(|s| s.screen.shows_catalog_controls()));
    let query = move || ctrl.with(|s| s.query.clone());

    view! {
        <header class="sticky top-0 z-20 bg-neutral-950/80 backdrop-blur border-b border-neutral-800">
            <div class="px-4 py-3 flex items-center justify-between">
                <h1 class="text-lg font-semibold">"LevelsProTechShop"</h1>
                <a href=chat_link target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">
                    <MessageCircle attr:class="w-5 h-5 text-green-500" />
                </a>
            </div>
            <Show when=move || show_search.get()>
                <div class="px-4 pb-3">
                    <label class="flex items-center gap-2 rounded-2xl bg-neutral-900 border border-neutral-800 px-4 py-2">
                        <Search attr:class="w-4 h-4 text-neutral-500" />
                        <input
                            type="search"
                            placeholder="Search laptops, gaming PC, accessories…"
                            class="w-full bg-transparent text-sm focus:outline-none"
                            prop:value=query
                            on:input=move |ev| ctrl.dispatch(Action::SetQuery(event_target_value(&ev)))
                        />
                    </label>
                </div>
            </Show>
        </header>
    }
}

/// 分类标签行
#[component]
pub fn CategoryChips() -> impl IntoView {
    let ctrl = use_controller();
    let active = Memo::new(move |_| ctrl.with(|s| s.category));

    view! {
        <div class="px-4 py-3 flex gap-2 overflow-x-auto">
            {CategoryFilter::options()
                .into_iter()
                .map(|option| {
                    let class = move || {
                        if active.get() == option {
                            "shrink-0 rounded-full px-4 py-1 text-xs bg-green-600 border border-green-600 text-white"
                        } else {
                            "shrink-0 rounded-full px-4 py-1 text-xs border border-neutral-800 text-neutral-300"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| ctrl.dispatch(Action::SetCategory(option))>
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn nav_icon(target: NavTarget) -> AnyView {
    match target {
        NavTarget::Home => view! { <Home attr:class="w-5 h-5" /> }.into_any(),
        NavTarget::Category(levelspro_shared::Category::GamingPcs) => {
            view! { <Gamepad attr:class="w-5 h-5" /> }.into_any()
        }
        NavTarget::Category(_) => view! { <Laptop attr:class="w-5 h-5" /> }.into_any(),
        NavTarget::Shop => view! { <ShoppingBag attr:class="w-5 h-5" /> }.into_any(),
        NavTarget::Profile => view! { <User attr:class="w-5 h-5" /> }.into_any(),
    }
}

/// 底部导航栏
#[component]
pub fn BottomNav() -> impl IntoView {
    let ctrl = use_controller();
    let active = Memo::new(move |_| ctrl.with(|s| s.active_nav()));

    view! {
        <nav class="fixed bottom-0 inset-x-0 z-30 bg-neutral-950 border-t border-neutral-800">
            <div class="grid grid-cols-5 px-2 py-2 text-xs">
                {NavTarget::BAR
                    .into_iter()
                    .map(|target| {
                        let class = move || {
                            if active.get() == target {
                                "flex flex-col items-center gap-1 text-green-500"
                            } else {
                                "flex flex-col items-center gap-1 text-neutral-400"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| ctrl.dispatch(Action::Navigate(target))>
                                {nav_icon(target)}
                                <span>{target.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
