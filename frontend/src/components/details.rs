//! 商品详情页：图片轮播、全屏查看、WhatsApp 下单

use crate::components::icons::*;
use crate::components::product_card::ProductImage;
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::Product;
use levelspro_shared::config::ClientConfig;
use levelspro_shared::order::whatsapp_link;
use levelspro_shared::view::Action;

#[component]
pub fn DetailsPage() -> impl IntoView {
    let ctrl = use_controller();
    let selected = Memo::new(move |_| ctrl.with(|s| s.selected.clone()));

    move || match selected.get() {
        Some(product) => view! { <ProductDetails product=product /> }.into_any(),
        None => view! {
            <div class="flex flex-col items-center gap-4 py-16 text-neutral-400">
                <p>"Product not available"</p>
                <button class="btn btn-sm" on:click=move |_| ctrl.dispatch(Action::Back)>"Back"</button>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let ctrl = use_controller();
    let config = expect_context::<ClientConfig>();

    let images: Vec<String> = product
        .image_urls
        .iter()
        .filter(|url| !url.trim().is_empty())
        .map(|url| ctrl.image_url(url))
        .collect();
    let count = images.len();
    let images = StoredValue::new(images);

    let (index, set_index) = signal(0usize);
    let (fullscreen, set_fullscreen) = signal(false);
    let current = move || images.with_value(|list| list.get(index.get()).cloned());

    let prev = move |_: leptos::ev::MouseEvent| set_index.update(|i| *i = if *i == 0 { count.saturating_sub(1) } else { *i - 1 });
    let next = move |_: leptos::ev::MouseEvent| set_index.update(|i| *i = if *i + 1 >= count { 0 } else { *i + 1 });

    let order_link = whatsapp_link(&config.whatsapp_number, &product);
    let name = product.name.clone();
    let category = product.category.label();
    let price = product.price.clone();
    let specs = product.specs.clone();
    let warranty = product.warranty.clone();
    let has_warranty = !warranty.trim().is_empty();

    view! {
        <main class="flex-1 pb-24">
            <div class="px-4 py-3">
                <button class="flex items-center gap-2 text-sm text-neutral-300" on:click=move |_| ctrl.dispatch(Action::Back)>
                    <ArrowLeft attr:class="w-4 h-4" />
                    "Back"
                </button>
            </div>

            <div class="relative h-64 w-full bg-neutral-900">
                {
                    let name = name.clone();
                    move || view! { <ProductImage src=current() alt=name.clone() frame="h-64 w-full" /> }
                }
                <Show when=move || { count > 1 }>
                    <button class="absolute left-2 top-1/2 -translate-y-1/2 btn btn-circle btn-sm bg-black/50 border-none" on:click=prev aria-label="Previous image">
                        <ChevronLeft attr:class="w-4 h-4" />
                    </button>
                    <button class="absolute right-2 top-1/2 -translate-y-1/2 btn btn-circle btn-sm bg-black/50 border-none" on:click=next aria-label="Next image">
                        <ChevronRight attr:class="w-4 h-4" />
                    </button>
                    <div class="absolute bottom-2 inset-x-0 flex justify-center gap-1">
                        {(0..count)
                            .map(|i| {
                                let class = move || {
                                    if index.get() == i { "w-2 h-2 rounded-full bg-white" } else { "w-2 h-2 rounded-full bg-white/40" }
                                };
                                view! { <button class=class on:click=move |_| set_index.set(i) aria-label=format!("Image {}", i + 1)></button> }
                            })
                            .collect_view()}
                    </div>
                </Show>
                <Show when=move || { count > 0 }>
                    <button class="absolute top-2 right-2 btn btn-circle btn-sm bg-black/50 border-none" on:click=move |_| set_fullscreen.set(true) aria-label="View fullscreen">
                        <Maximize attr:class="w-4 h-4" />
                    </button>
                </Show>
            </div>

            <div class="px-4 py-4 space-y-4">
                <div>
                    <p class="text-xs text-neutral-500">{category}</p>
                    <h2 class="text-xl font-semibold">{name.clone()}</h2>
                    <p class="text-lg text-green-500 font-semibold mt-1">{price}</p>
                </div>

                <section>
                    <h3 class="text-sm font-semibold mb-2">"Specifications"</h3>
                    <ul class="space-y-1 text-sm text-neutral-300 list-disc list-inside">
                        {specs.into_iter().map(|spec| view! { <li>{spec}</li> }).collect_view()}
                    </ul>
                </section>

                <Show when=move || has_warranty>
                    <p class="text-sm">
                        <span class="text-neutral-500">"Warranty: "</span>
                        {warranty.clone()}
                    </p>
                </Show>

                <a
                    href=order_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn w-full bg-green-600 hover:bg-green-700 border-none text-white gap-2"
                >
                    <MessageCircle attr:class="w-5 h-5" />
                    "Order on WhatsApp"
                </a>
            </div>

            <Show when=move || fullscreen.get()>
                <div class="fixed inset-0 z-50 bg-black flex items-center justify-center">
                    <button class="absolute top-4 right-4 btn btn-circle btn-sm" on:click=move |_| set_fullscreen.set(false) aria-label="Close">
                        <Close attr:class="w-4 h-4" />
                    </button>
                    {move || current().map(|src| view! { <img src=src class="max-h-full max-w-full object-contain" /> })}
                    <Show when=move || { count > 1 }>
                        <button class="absolute left-2 btn btn-circle" on:click=prev aria-label="Previous image">
                            <ChevronLeft attr:class="w-5 h-5" />
                        </button>
                        <button class="absolute right-2 btn btn-circle" on:click=next aria-label="Next image">
                            <ChevronRight attr:class="w-5 h-5" />
                        </button>
                    </Show>
                </div>
            </Show>
        </main>
    }
}
