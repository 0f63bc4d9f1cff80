use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-lg">
                    <h1 class="text-5xl font-bold">"QuestForge"</h1>
                    <p class="py-6 text-base-content/80">
                        "Pick a hero, take on quests, earn gold and experience, and climb "
                        "the leaderboard."
                    </p>
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || view! {
                            <div class="flex gap-3 justify-center">
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| router.navigate(AppRoute::Login)
                                >
                                    "Log in"
                                </button>
                                <button
                                    class="btn btn-outline"
                                    on:click=move |_| router.navigate(AppRoute::Register)
                                >
                                    "Create account"
                                </button>
                            </div>
                        }
                    >
                        <button
                            class="btn btn-primary"
                            on:click=move |_| router.navigate(AppRoute::Dashboard)
                        >
                            "Continue your adventure"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
