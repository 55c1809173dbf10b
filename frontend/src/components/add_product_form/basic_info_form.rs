//! 基础信息表单组件
//!
//! 负责名称、分类、价格和保修的 UI 渲染。

use leptos::prelude::*;
use levelspro_shared::draft::DraftEdit;
use levelspro_shared::{Category, DEFAULT_WARRANTY};

use super::form_state::FormState;

#[component]
pub fn BasicInfoForm(state: FormState) -> impl IntoView {
    let on_category = move |ev: leptos::ev::Event| {
        if let Some(category) = Category::from_label(&event_target_value(&ev)) {
            state.edit(DraftEdit::Category(category));
        }
    };

    view! {
        <div class="form-control">
            <label for="p_name" class="label">
                <span class="label-text">"Product name *"</span>
            </label>
            <input id="p_name"
                type="text"
                placeholder="HP EliteBook 840 G6"
                on:input=move |ev| state.edit(DraftEdit::Name(event_target_value(&ev)))
                prop:value=move || state.read(|d| d.name.clone())
                class="input input-bordered w-full bg-neutral-950"
            />
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="p_category" class="label">
                    <span class="label-text">"Category"</span>
                </label>
                <select id="p_category"
                    class="select select-bordered w-full bg-neutral-950"
                    on:change=on_category
                    prop:value=move || state.read(|d| d.category.label())
                >
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-control">
                <label for="p_price" class="label">
                    <span class="label-text">"Price *"</span>
                </label>
                <input id="p_price"
                    type="text"
                    placeholder="950,000 TZS"
                    on:input=move |ev| state.edit(DraftEdit::Price(event_target_value(&ev)))
                    prop:value=move || state.read(|d| d.price.clone())
                    class="input input-bordered w-full bg-neutral-950"
                />
            </div>
        </div>

        <div class="form-control">
            <label for="p_warranty" class="label">
                <span class="label-text">"Warranty"</span>
            </label>
            <input id="p_warranty"
                type="text"
                placeholder=DEFAULT_WARRANTY
                on:input=move |ev| state.edit(DraftEdit::Warranty(event_target_value(&ev)))
                prop:value=move || state.read(|d| d.warranty.clone())
                class="input input-bordered w-full bg-neutral-950"
            />
        </div>
    }
}
