use crate::components::icons::*;
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::Product;
use levelspro_shared::view::Action;

/// 商品图片；没有图片时显示占位
#[component]
pub fn ProductImage(
    #[prop(into)] src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] frame: String,
) -> impl IntoView {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => view! { <img src=src alt=alt class=format!("object-cover {}", frame) loading="lazy" /> }
            .into_any(),
        None => view! {
            <div class=format!("flex items-center justify-center bg-neutral-800 text-neutral-600 {}", frame)>
                <ImageIcon attr:class="w-8 h-8" />
            </div>
        }
        .into_any(),
    }
}

/// 商品卡片，点击进入详情
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctrl = use_controller();
    let cover = product.cover_image().map(|url| ctrl.image_url(url));
    let specs = product.specs.join(" • ");
    let name = product.name.clone();
    let price = product.price.clone();

    view! {
        <button
            class="text-left rounded-2xl bg-neutral-900 border border-neutral-800 overflow-hidden active:scale-[0.97] transition-transform"
            on:click=move |_| ctrl.dispatch(Action::SelectProduct(product.clone()))
        >
            <ProductImage src=cover alt=name.clone() frame="h-28 w-full" />
            <div class="p-3">
                <h3 class="text-sm font-medium line-clamp-2">{name}</h3>
                <p class="text-xs text-neutral-400 mt-1 line-clamp-1">{specs}</p>
                <div class="flex items-center justify-between mt-2">
                    <span class="text-sm font-semibold">{price}</span>
                    <span class="text-xs text-green-500">"Order"</span>
                </div>
            </div>
        </button>
    }
}

/// 商品网格
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4">
            <For
                each=move || products.get()
                key=|p| p.id.clone()
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}
