use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;
use crate::session::Session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();
    let router = use_router();

    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (show_onboarding, set_show_onboarding) = signal(false);
    let selected = player.selected_signal();

    Effect::new(move |_| {
        if Session::take_new_user() {
            set_show_onboarding.set(true);
        }
        let Some(api) = auth.api() else {
            set_loading.set(false);
            return;
        };
        if player.selected().is_some() {
            set_loading.set(false);
            return;
        }
        // No local selection: ask the backend, and send the player to the
        // character picker when there is genuinely none.
        spawn_local(async move {
            match player.refresh_data(&api).await {
                Ok(()) => {
                    if player.selected().is_none() {
                        router.navigate(AppRoute::Characters);
                    }
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <Show when=move || show_onboarding.get()>
                <div role="alert" class="alert alert-info">
                    <span>
                        "Welcome to QuestForge! Create a character, then head to the "
                        "quest board to earn your first rewards."
                    </span>
                    <button class="btn btn-sm" on:click=move |_| set_show_onboarding.set(false)>
                        "Got it"
                    </button>
                </div>
            </Show>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                    <button
                        class="btn btn-sm"
                        on:click=move |_| router.navigate(AppRoute::Characters)
                    >
                        "Go to characters"
                    </button>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && selected.get().is_some()>
                {move || selected.get().map(|character| view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <div class="flex items-center gap-4">
                                {character.image_url.clone().map(|url| view! {
                                    <img src=url alt="" class="w-20 h-20 rounded-2xl object-cover" />
                                })}
                                <div>
                                    <h1 class="text-2xl font-bold">{character.name.clone()}</h1>
                                    <p class="text-base-content/70">
                                        {character.class_name.clone()}
                                    </p>
                                </div>
                            </div>

                            <div class="stats stats-vertical md:stats-horizontal shadow mt-4">
                                <div class="stat">
                                    <div class="stat-title">"Level"</div>
                                    <div class="stat-value text-primary">{character.level}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Experience"</div>
                                    <div class="stat-value text-secondary">{character.experience}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Gold"</div>
                                    <div class="stat-value text-warning">{character.gold}</div>
                                </div>
                            </div>

                            <div class="card-actions justify-end mt-4">
                                <button
                                    class="btn btn-outline"
                                    on:click=move |_| router.navigate(AppRoute::Leaderboard)
                                >
                                    "Leaderboard"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| router.navigate(AppRoute::Quests)
                                >
                                    "Quest board"
                                </button>
                            </div>
                        </div>
                    </div>
                })}
            </Show>
        </div>
    }
}
