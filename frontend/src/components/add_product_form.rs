mod basic_info_form;
mod form_state;
mod image_fields;
mod spec_fields;

use crate::components::icons::*;
use crate::web::controller::use_controller;
use basic_info_form::BasicInfoForm;
use form_state::FormState;
use image_fields::ImageFields;
use leptos::prelude::*;
use levelspro_shared::view::{Action, DashboardView};
use spec_fields::SpecFields;

/// 新增商品表单
#[component]
pub fn AddProductForm() -> impl IntoView {
    let ctrl = use_controller();
    let state = FormState::new(ctrl);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <div class="card bg-neutral-900 border border-neutral-800">
            <form class="card-body gap-4" on:submit=on_submit>
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-base">"Add Product"</h3>
                    <button
                        type="button"
                        class="btn btn-sm btn-ghost"
                        on:click=move |_| ctrl.dispatch(Action::ShowDashboard(DashboardView::Main))
                    >
                        "Cancel"
                    </button>
                </div>

                {move || {
                    state
                        .error()
                        .map(|e| {
                            view! {
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{e.to_string()}</span>
                                </div>
                            }
                        })
                }}

                <BasicInfoForm state=state />
                <SpecFields state=state />
                <ImageFields state=state />

                <button
                    type="submit"
                    class="btn bg-green-600 hover:bg-green-700 border-none text-white gap-2"
                    disabled=move || state.is_submitting()
                >
                    {move || if state.is_submitting() {
                        view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                    } else {
                        view! { <Plus attr:class="w-4 h-4" /> "Add Product" }.into_any()
                    }}
                </button>
            </form>
        </div>
    }
}
