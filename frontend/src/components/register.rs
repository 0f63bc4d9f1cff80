use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::RegisterRequest;

use crate::auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // Username echoed back by the backend once the account exists.
    let (registered_as, set_registered_as) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if email.get().trim().is_empty() || username.get().trim().is_empty() {
            set_error_msg.set(Some("Please fill in every field.".to_string()));
            return;
        }
        if password.get().len() < 6 {
            set_error_msg.set(Some("Password must be at least 6 characters.".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let request = RegisterRequest {
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
                username: username.get_untracked().trim().to_string(),
            };
            match auth::register(request).await {
                Ok(response) => set_registered_as.set(Some(response.username)),
                Err(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create your account"</h1>
                    <p class="text-base-content/70">"Forge a hero and start questing"</p>
                </div>

                <Show
                    when=move || registered_as.get().is_none()
                    fallback=move || view! {
                        <div class="card w-full shadow-2xl bg-base-100">
                            <div class="card-body text-center">
                                <h2 class="card-title justify-center">"Almost there!"</h2>
                                <p>
                                    "Account " <b>{move || registered_as.get().unwrap_or_default()}</b>
                                    " created. Check your inbox for the verification link, then log in."
                                </p>
                                <div class="card-actions justify-center mt-4">
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| router.navigate(AppRoute::Login)
                                    >
                                        "Go to login"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                >
                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="reg-email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="reg-email"
                                    type="email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reg-username">
                                    <span class="label-text">"Username"</span>
                                </label>
                                <input
                                    id="reg-username"
                                    type="text"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reg-password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="reg-password"
                                    type="password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reg-confirm">
                                    <span class="label-text">"Confirm password"</span>
                                </label>
                                <input
                                    id="reg-confirm"
                                    type="password"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                    } else {
                                        "Create account".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-sm text-center mt-2">
                                "Already have an account? "
                                <a
                                    class="link link-primary"
                                    on:click=move |_| router.navigate(AppRoute::Login)
                                >
                                    "Log in"
                                </a>
                            </p>
                        </form>
                    </div>
                </Show>
            </div>
        </div>
    }
}
