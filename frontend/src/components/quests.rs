use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::{Character, Quest, QuestCompletion, is_completed};

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn QuestsPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();
    let router = use_router();

    let (character, set_character) = signal(Option::<Character>::None);
    let (quests, set_quests) = signal(Vec::<Quest>::new());
    let (completions, set_completions) = signal(Vec::<QuestCompletion>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    let (busy_id, set_busy_id) = signal(Option::<i64>::None);

    let load = move || {
        let Some(api) = auth.api() else { return };
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let result: Result<(), ApiError> = async {
                // Context first, backend second.
                let active = match player.selected() {
                    Some(c) => Some(c),
                    None => {
                        let fetched = api.selected_character().await?;
                        if let Some(c) = fetched.clone() {
                            player.set_selected(Some(c));
                        }
                        fetched
                    }
                };
                let Some(active) = active else {
                    router.navigate(AppRoute::Characters);
                    return Ok(());
                };
                let quest_list = api.quests().await?;
                let completed = api.completed_quests(active.character_id).await?;
                set_character.set(Some(active));
                set_quests.set(quest_list);
                set_completions.set(completed);
                Ok(())
            }
            .await;
            if let Err(e) = result {
                match e {
                    ApiError::Unauthorized => auth::expire_session(auth, player),
                    e => set_error_msg.set(Some(e.to_string())),
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    // Notices fade after a few seconds, errors stay until replaced.
    Effect::new(move |_| {
        if notice.get().is_some_and(|(_, is_err)| !is_err) {
            set_timeout(
                move || set_notice.set(None),
                std::time::Duration::from_secs(4),
            );
        }
    });

    let handle_attempt = move |quest: Quest| {
        let Some(api) = auth.api() else { return };
        let Some(active) = character.get_untracked() else { return };
        if completions.with_untracked(|c| is_completed(quest.quest_id, c)) {
            set_notice.set(Some(("You already completed this quest.".to_string(), false)));
            return;
        }
        set_busy_id.set(Some(quest.quest_id));
        spawn_local(async move {
            match api.attempt_quest(quest.quest_id, active.character_id).await {
                Ok(outcome) if outcome.already_completed => {
                    // Informational, not an error; no rewards, no mutation.
                    let msg = outcome
                        .message
                        .unwrap_or_else(|| "You already completed this quest.".to_string());
                    set_notice.set(Some((msg, false)));
                }
                Ok(outcome) if outcome.success => {
                    let mut updated = active.clone();
                    updated.apply_attempt(&outcome);
                    set_completions.update(|list| {
                        list.push(QuestCompletion::from_attempt(
                            quest.quest_id,
                            &outcome,
                            Utc::now(),
                        ));
                    });
                    // Push into the shared context so the navbar and
                    // dashboard pick the new numbers up immediately.
                    player.set_selected(Some(updated.clone()));
                    set_character.set(Some(updated));

                    let mut msg = format!(
                        "Quest complete! +{} XP, +{} gold.",
                        outcome.experience_gained, outcome.gold_gained
                    );
                    if outcome.level_up {
                        if let Some(level) = outcome.new_level {
                            msg.push_str(&format!(" Level up! You are now level {level}."));
                        }
                    }
                    set_notice.set(Some((msg, false)));
                }
                Ok(outcome) => {
                    let msg = outcome
                        .message
                        .unwrap_or_else(|| "The quest attempt failed.".to_string());
                    set_notice.set(Some((msg, true)));
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_notice.set(Some((e.to_string(), true))),
            }
            set_busy_id.set(None);
        });
    };

    let character_level = move || character.get().map(|c| c.level).unwrap_or(0);

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <Show when=move || notice.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        match notice.get() {
                            Some((_, true)) => "alert alert-error shadow-lg",
                            _ => "alert alert-success shadow-lg",
                        }
                    }>
                        <span>{move || notice.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Quest board"</h1>
                    <p class="text-base-content/70 text-sm">
                        {move || {
                            character
                                .get()
                                .map(|c| format!("Questing as {} (level {})", c.name, c.level))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
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
                !loading.get() && quests.with(|q| q.is_empty()) && error_msg.get().is_none()
            }>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">"No quests available"</h2>
                        <p class="text-base-content/70">"The quest board is empty for now."</p>
                    </div>
                </div>
            </Show>

            <div class="space-y-3">
                <For
                    each=move || quests.get()
                    key=|q| q.quest_id
                    children=move |quest| {
                        let id = quest.quest_id;
                        let required = quest.required_level;
                        let attempt_target = quest.clone();
                        let done = move || completions.with(|c| is_completed(id, c));
                        let locked = move || character_level() < required;
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body py-4">
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <h2 class="card-title text-lg">
                                                {quest.title.clone()}
                                                <Show when=done>
                                                    <span class="badge badge-success">"Completed"</span>
                                                </Show>
                                            </h2>
                                            <p class="text-sm text-base-content/70">
                                                {quest.description.clone()}
                                            </p>
                                            <div class="flex gap-2 mt-2">
                                                <span class="badge badge-outline">
                                                    "+" {quest.experience_reward} " XP"
                                                </span>
                                                <span class="badge badge-outline">
                                                    "+" {quest.gold_reward} " gold"
                                                </span>
                                                <span class="badge badge-ghost">
                                                    "Level " {required} "+"
                                                </span>
                                            </div>
                                        </div>
                                        <button
                                            class="btn btn-primary btn-sm"
                                            disabled=move || {
                                                done() || locked() || busy_id.get() == Some(id)
                                            }
                                            on:click=move |_| handle_attempt(attempt_target.clone())
                                        >
                                            {move || if busy_id.get() == Some(id) {
                                                view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                            } else if done() {
                                                "Done".into_any()
                                            } else if locked() {
                                                "Locked".into_any()
                                            } else {
                                                "Attempt".into_any()
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
