//! 首页与商店页

use crate::components::icons::*;
use crate::components::layout::CategoryChips;
use crate::components::product_card::{ProductGrid, ProductImage};
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::view::Action;

/// 加载中 / 加载失败提示，失败时提供重试按钮
#[component]
fn CatalogStatus() -> impl IntoView {
    let ctrl = use_controller();
    let loading = Memo::new(move |_| ctrl.with(|s| s.catalog.loading));
    let error = Memo::new(move |_| ctrl.with(|s| s.catalog.error.clone()));

    view! {
        <Show when=move || loading.get()>
            <div class="flex justify-center py-8">
                <span class="loading loading-spinner loading-md text-green-500"></span>
            </div>
        </Show>
        {move || {
            error
                .get()
                .map(|message| {
                    view! {
                        <div role="alert" class="flex flex-col items-center gap-3 py-8 text-center">
                            <p class="text-sm text-red-400">{message}</p>
                            <button
                                class="btn btn-sm btn-outline gap-2"
                                on:click=move |_| ctrl.dispatch(Action::RetryCatalog)
                            >
                                <RefreshCw attr:class="w-4 h-4" />
                                "Retry"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

/// 过滤结果为空时的提示
#[component]
fn EmptyResults() -> impl IntoView {
    let ctrl = use_controller();
    let empty = move || {
        ctrl.with(|s| {
            !s.catalog.loading && s.catalog.error.is_none() && s.visible_products().is_empty()
        })
    };

    view! {
        <Show when=empty>
            <p class="py-8 text-center text-sm text-neutral-500">"No products found"</p>
        </Show>
    }
}

/// 热门商品横向轮播
#[component]
fn TrendingStrip() -> impl IntoView {
    let ctrl = use_controller();
    let trending = Memo::new(move |_| ctrl.with(|s| s.trending.data.clone()));

    view! {
        <Show when=move || !trending.with(Vec::is_empty)>
            <section class="mb-6">
                <h2 class="text-sm font-semibold mb-3">"Popular right now"</h2>
                <div class="flex gap-3 overflow-x-auto snap-x pb-2">
                    <For
                        each=move || trending.get()
                        key=|p| p.id.clone()
                        children=move |product| {
                            let cover = product.cover_image().map(|url| ctrl.image_url(url));
                            let name = product.name.clone();
                            let price = product.price.clone();
                            view! {
                                <button
                                    class="snap-start shrink-0 w-40 text-left rounded-2xl bg-neutral-900 border border-neutral-800 overflow-hidden"
                                    on:click=move |_| ctrl.dispatch(Action::SelectProduct(product.clone()))
                                >
                                    <ProductImage src=cover alt=name.clone() frame="h-24 w-full" />
                                    <div class="p-2">
                                        <p class="text-xs font-medium line-clamp-1">{name}</p>
                                        <p class="text-xs text-green-500 mt-1">{price}</p>
                                    </div>
                                </button>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctrl = use_controller();
    let visible = Signal::derive(move || ctrl.with(|s| s.visible_products()));

    view! {
        <CategoryChips />
        <main class="flex-1 px-4 pb-24">
            <TrendingStrip />
            <CatalogStatus />
            <ProductGrid products=visible />
            <EmptyResults />
        </main>
    }
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let ctrl = use_controller();
    let visible = Signal::derive(move || ctrl.with(|s| s.visible_products()));
    let heading = move || ctrl.with(|s| s.category.label());

    view! {
        <CategoryChips />
        <main class="flex-1 px-4 pb-24">
            <h2 class="text-sm font-semibold mb-3">{heading}</h2>
            <CatalogStatus />
            <ProductGrid products=visible />
            <EmptyResults />
        </main>
    }
}
