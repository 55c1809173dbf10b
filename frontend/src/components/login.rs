use crate::components::icons::*;
use crate::web::controller::use_controller;
use leptos::prelude::*;
use levelspro_shared::view::Action;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctrl = use_controller();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let is_submitting = Memo::new(move |_| ctrl.with(|s| s.login_pending));
    let error_msg = Memo::new(move |_| ctrl.with(|s| s.login_error.clone()));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        ctrl.dispatch(Action::SubmitLogin {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="flex-1 flex flex-col px-4 py-6 pb-24">
            <button class="flex items-center gap-2 text-sm text-neutral-300 mb-6" on:click=move |_| ctrl.dispatch(Action::Back)>
                <ArrowLeft attr:class="w-4 h-4" />
                "Back"
            </button>

            <div class="text-center mb-4">
                <div class="flex flex-col items-center gap-2">
                    <div class="p-3 bg-green-600/10 rounded-2xl text-green-500">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-2xl font-bold">"Admin Login"</h1>
                    <p class="text-neutral-400 text-sm">
                        "Sign in to manage your product listings"
                    </p>
                </div>
            </div>

            <div class="card w-full bg-neutral-900 border border-neutral-800">
                <form class="card-body" on:submit=on_submit>
                    {move || {
                        error_msg
                            .get()
                            .map(|message| {
                                view! {
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{message}</span>
                                    </div>
                                }
                            })
                    }}

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered bg-neutral-950"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered bg-neutral-950"
                            required
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn bg-green-600 hover:bg-green-700 border-none text-white" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                            } else {
                                "Login".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
