use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::Character;

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;
use crate::web;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn CharactersPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();
    let router = use_router();

    let (characters, set_characters) = signal(Vec::<Character>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (busy_id, set_busy_id) = signal(Option::<i64>::None);

    let load = move || {
        let Some(api) = auth.api() else { return };
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.my_characters().await {
                Ok(list) => set_characters.set(list),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let handle_select = move |character_id: i64| {
        let Some(api) = auth.api() else { return };
        set_busy_id.set(Some(character_id));
        spawn_local(async move {
            // Select, then re-fetch the authoritative selection and the
            // list, so exactly one row carries the selected flag.
            let result: Result<Vec<Character>, ApiError> = async {
                api.select_character(character_id).await?;
                player.refresh_data(&api).await?;
                api.my_characters().await
            }
            .await;
            match result {
                Ok(list) => set_characters.set(list),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_busy_id.set(None);
        });
    };

    let handle_remove = move |character: Character| {
        if !web::confirm(&format!(
            "Remove {}? Their progress is lost for good.",
            character.name
        )) {
            return;
        }
        let Some(api) = auth.api() else { return };
        let id = character.character_id;
        spawn_local(async move {
            match api.delete_user_character(id).await {
                Ok(()) => {
                    set_characters.update(|list| list.retain(|c| c.character_id != id));
                    if player.selected().is_some_and(|c| c.character_id == id) {
                        player.set_selected(None);
                    }
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
        });
    };

    let is_empty = move || characters.with(|c| c.is_empty());

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Your characters"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Select the hero you want to play as."
                    </p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| router.navigate(AppRoute::AddCharacter)
                >
                    "New character"
                </button>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm" on:click=move |_| load()>"Retry"</button>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && is_empty() && error_msg.get().is_none()>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">"No characters yet"</h2>
                        <p class="text-base-content/70">
                            "Every adventure starts with a hero. Create your first one."
                        </p>
                        <button
                            class="btn btn-primary mt-2"
                            on:click=move |_| router.navigate(AppRoute::AddCharacter)
                        >
                            "Create a character"
                        </button>
                    </div>
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                <For
                    each=move || characters.get()
                    key=|c| (c.character_id, c.is_selected)
                    children=move |character| {
                        let remove_target = character.clone();
                        let id = character.character_id;
                        let is_selected = character.is_selected;
                        view! {
                            <div class=move || {
                                if is_selected {
                                    "card bg-base-100 shadow-xl border-2 border-primary"
                                } else {
                                    "card bg-base-100 shadow"
                                }
                            }>
                                <div class="card-body">
                                    <div class="flex items-center gap-3">
                                        {character.image_url.clone().map(|url| view! {
                                            <img src=url alt="" class="w-14 h-14 rounded-xl object-cover" />
                                        })}
                                        <div>
                                            <h2 class="card-title">
                                                {character.name.clone()}
                                                <Show when=move || is_selected>
                                                    <span class="badge badge-primary">"Selected"</span>
                                                </Show>
                                            </h2>
                                            <p class="text-sm text-base-content/70">
                                                {character.class_name.clone()} " · Level " {character.level}
                                            </p>
                                        </div>
                                    </div>
                                    <div class="flex gap-4 text-sm mt-2">
                                        <span>{character.experience} " XP"</span>
                                        <span>{character.gold} " gold"</span>
                                    </div>
                                    <div class="card-actions justify-end mt-2">
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            on:click=move |_| handle_remove(remove_target.clone())
                                        >
                                            "Remove"
                                        </button>
                                        <button
                                            class="btn btn-primary btn-sm"
                                            disabled=move || {
                                                is_selected || busy_id.get() == Some(id)
                                            }
                                            on:click=move |_| handle_select(id)
                                        >
                                            {move || if busy_id.get() == Some(id) {
                                                view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                            } else {
                                                "Select".into_any()
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
