use crate::components::icons::*;
use leptos::prelude::*;
use levelspro_shared::draft::DraftEdit;

use super::form_state::FormState;

/// 规格输入列表，至少保留一项
#[component]
pub fn SpecFields(state: FormState) -> impl IntoView {
    let count = move || state.read(|d| d.specs.len());
    let can_remove = move || state.read(|d| d.can_remove_spec());

    view! {
        <div class="form-control space-y-2">
            <span class="label-text">"Specifications"</span>
            <For
                each=move || 0..count()
                key=|i| *i
                children=move |i| {
                    view! {
                        <div class="flex gap-2">
                            <input
                                type="text"
                                placeholder="e.g. 8GB RAM"
                                on:input=move |ev| state.edit(DraftEdit::Spec(i, event_target_value(&ev)))
                                prop:value=move || state.spec(i)
                                class="input input-bordered input-sm flex-1 bg-neutral-950"
                            />
                            <Show when=can_remove>
                                <button
                                    type="button"
                                    class="btn btn-sm btn-ghost btn-square text-red-400"
                                    on:click=move |_| state.edit(DraftEdit::RemoveSpec(i))
                                    aria-label="Remove spec"
                                >
                                    <Close attr:class="w-4 h-4" />
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
            <button type="button" class="btn btn-sm btn-ghost gap-1 self-start" on:click=move |_| state.edit(DraftEdit::AddSpec)>
                <Plus attr:class="w-4 h-4" />
                "Add spec"
            </button>
        </div>
    }
}
