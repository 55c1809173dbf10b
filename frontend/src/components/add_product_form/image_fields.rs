//! 图片输入列表
//!
//! 每一项可以上传本地文件，也可以填写链接；两者在表单中是不同的条目类型。

use crate::components::icons::*;
use crate::web::file::read_as_data_url;
use leptos::prelude::*;
use leptos::task::spawn_local;
use levelspro_shared::draft::{DraftEdit, ImageEntry};
use web_sys::HtmlInputElement;

use super::form_state::FormState;

#[component]
fn ImageField(state: FormState, index: usize, can_remove: Signal<bool>) -> impl IntoView {
    let entry = Memo::new(move |_| state.image(index));

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 允许再次选择同一个文件
        input.set_value("");

        let draft = state.generation();
        spawn_local(async move {
            let result = read_as_data_url(&file).await.map(|data_url| ImageEntry::Upload {
                data_url,
                file_name: file.name(),
            });
            state.image_read(draft, index, result);
        });
    };

    let is_upload = move || entry.with(|e| matches!(e, ImageEntry::Upload { .. }));

    view! {
        <div class="flex items-center gap-2">
            <div class="w-12 h-12 shrink-0 rounded-lg overflow-hidden bg-neutral-800 flex items-center justify-center">
                {move || match entry.with(|e| e.preview().map(str::to_string)) {
                    Some(src) => view! { <img src=src class="w-full h-full object-cover" /> }.into_any(),
                    None => view! { <ImageIcon attr:class="w-5 h-5 text-neutral-600" /> }.into_any(),
                }}
            </div>
            <input
                type="text"
                placeholder="Upload a file or paste an image link"
                readonly=is_upload
                on:input=move |ev| state.edit(DraftEdit::Image(index, ImageEntry::from_text(&event_target_value(&ev))))
                prop:value=move || entry.with(|e| e.display_text().to_string())
                class="input input-bordered input-sm flex-1 min-w-0 bg-neutral-950"
            />
            <label class="btn btn-sm btn-ghost btn-square" aria-label="Upload image">
                <Upload attr:class="w-4 h-4" />
                <input type="file" accept="image/*" class="hidden" on:change=on_file />
            </label>
            <Show when=move || can_remove.get()>
                <button
                    type="button"
                    class="btn btn-sm btn-ghost btn-square text-red-400"
                    on:click=move |_| state.edit(DraftEdit::RemoveImage(index))
                    aria-label="Remove image"
                >
                    <Close attr:class="w-4 h-4" />
                </button>
            </Show>
        </div>
    }
}

/// 图片输入列表，至少保留一项
#[component]
pub fn ImageFields(state: FormState) -> impl IntoView {
    let count = move || state.read(|d| d.images.len());
    let can_remove = Signal::derive(move || state.read(|d| d.can_remove_image()));
    let unsaved_links = move || state.read(|d| d.unsaved_links());

    view! {
        <div class="form-control space-y-2">
            <span class="label-text">"Images *"</span>
            <For
                each=move || 0..count()
                key=|i| *i
                children=move |i| view! { <ImageField state=state index=i can_remove=can_remove /> }
            />
            <button type="button" class="btn btn-sm btn-ghost gap-1 self-start" on:click=move |_| state.edit(DraftEdit::AddImage)>
                <Plus attr:class="w-4 h-4" />
                "Add image"
            </button>
            <p class="text-xs text-neutral-500">"JPG or PNG, up to 5MB each"</p>
            <Show when=move || { unsaved_links() > 0 }>
                <p class="text-xs text-amber-400">
                    "Image links are not saved. Upload the file to include it."
                </p>
            </Show>
        </div>
    }
}
