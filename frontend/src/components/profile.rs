use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::config::ClientConfig;
use levelspro_shared::view::Action;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctrl = use_controller();
    let auth = use_auth();
    let config = expect_context::<ClientConfig>();
    let chat_link = format!("https://wa.me/{}", config.whatsapp_number);

    let username = move || auth.session.with(|s| s.as_ref().map(|s| s.username.clone()));
    let email = move || {
        auth.session
            .with(|s| s.as_ref().and_then(|s| s.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <main class="flex-1 px-4 py-6 pb-24 space-y-6">
            <div class="flex items-center gap-4">
                <div class="p-3 rounded-full bg-neutral-900 border border-neutral-800">
                    <User attr:class="w-8 h-8 text-neutral-400" />
                </div>
                <div>
                    {move || match username() {
                        Some(name) => view! {
                            <p class="font-semibold">{name}</p>
                            <p class="text-xs text-neutral-500">{email}</p>
                        }
                        .into_any(),
                        None => view! {
                            <p class="font-semibold">"Guest"</p>
                            <p class="text-xs text-neutral-500">"Sign in to manage your listings"</p>
                        }
                        .into_any(),
                    }}
                </div>
            </div>

            <button
                class="btn w-full bg-neutral-900 border-neutral-800 gap-2"
                on:click=move |_| ctrl.dispatch(Action::OpenDashboard)
            >
                <Package attr:class="w-5 h-5" />
                "Dashboard"
            </button>

            <a
                href=chat_link
                target="_blank"
                rel="noopener noreferrer"
                class="btn w-full btn-outline border-green-600 text-green-500 gap-2"
            >
                <MessageCircle attr:class="w-5 h-5" />
                "Contact us on WhatsApp"
            </a>
        </main>
    }
}
