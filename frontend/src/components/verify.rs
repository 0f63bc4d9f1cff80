use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Landing page for the emailed verification link; the backend redirects
/// the browser here with the outcome already decided.
#[component]
pub fn VerifyResultPage(success: bool) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    {if success {
                        view! {
                            <h1 class="text-4xl font-bold text-success">"Email verified"</h1>
                            <p class="py-6">"Your account is ready. Log in to get started."</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| router.navigate(AppRoute::Login)
                            >
                                "Log in"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <h1 class="text-4xl font-bold text-error">"Verification failed"</h1>
                            <p class="py-6">
                                "The link is invalid or has expired. Register again to "
                                "receive a fresh one."
                            </p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| router.navigate(AppRoute::Register)
                            >
                                "Back to registration"
                            </button>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
