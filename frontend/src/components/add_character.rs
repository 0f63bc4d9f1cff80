use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::CharacterTemplate;

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Catalog picker: the user creates a character from one of the templates
/// maintained by the admins.
#[component]
pub fn AddCharacterPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();
    let router = use_router();

    let (catalog, set_catalog) = signal(Vec::<CharacterTemplate>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (busy_id, set_busy_id) = signal(Option::<i64>::None);

    let load = move || {
        let Some(api) = auth.api() else { return };
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.character_catalog().await {
                Ok(list) => set_catalog.set(list),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let handle_create = move |character_id: i64| {
        let Some(api) = auth.api() else { return };
        set_busy_id.set(Some(character_id));
        spawn_local(async move {
            match api.create_character(character_id).await {
                Ok(()) => router.navigate(AppRoute::Characters),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_busy_id.set(None);
        });
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Choose a hero"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Pick a template from the catalog to forge a new character."
                    </p>
                </div>
                <button
                    class="btn btn-ghost"
                    on:click=move |_| router.navigate(AppRoute::Characters)
                >
                    "Back"
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

            <Show when=move || {
                !loading.get() && catalog.with(|c| c.is_empty()) && error_msg.get().is_none()
            }>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">"The catalog is empty"</h2>
                        <p class="text-base-content/70">
                            "No character templates are available right now. Check back later."
                        </p>
                    </div>
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                <For
                    each=move || catalog.get()
                    key=|t| t.character_id
                    children=move |template| {
                        let id = template.character_id;
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <div class="flex items-center gap-3">
                                        {template.image_url.clone().map(|url| view! {
                                            <img src=url alt="" class="w-14 h-14 rounded-xl object-cover" />
                                        })}
                                        <div>
                                            <h2 class="card-title">{template.name.clone()}</h2>
                                            <p class="text-sm text-base-content/70">
                                                {template.class_name.clone()}
                                            </p>
                                        </div>
                                    </div>
                                    <div class="card-actions justify-end mt-2">
                                        <button
                                            class="btn btn-primary btn-sm"
                                            disabled=move || busy_id.get() == Some(id)
                                            on:click=move |_| handle_create(id)
                                        >
                                            {move || if busy_id.get() == Some(id) {
                                                view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                            } else {
                                                "Create".into_any()
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
