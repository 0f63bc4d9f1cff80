use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::{LeaderboardEntry, LeaderboardSort};

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();

    let (sort, set_sort) = signal(LeaderboardSort::default());
    let (entries, set_entries) = signal(Vec::<LeaderboardEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // Reloads whenever the sort key changes.
    Effect::new(move |_| {
        let sort = sort.get();
        let Some(api) = auth.api() else { return };
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.leaderboard(sort).await {
                Ok(list) => set_entries.set(list),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Leaderboard"</h1>
                    <p class="text-base-content/70 text-sm">"The realm's finest heroes."</p>
                </div>
                <select
                    class="select select-bordered"
                    on:change=move |ev| {
                        if let Some(s) = LeaderboardSort::from_query_value(&event_target_value(&ev)) {
                            set_sort.set(s);
                        }
                    }
                >
                    {LeaderboardSort::ALL
                        .into_iter()
                        .map(|s| view! {
                            <option
                                value=s.query_value()
                                selected=move || sort.get() == s
                            >
                                {s.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Hero"</th>
                                <th>"Player"</th>
                                <th>"Level"</th>
                                <th>"XP"</th>
                                <th>"Gold"</th>
                                <th>"Quests"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get()>
                                <tr>
                                    <td colspan="7" class="text-center py-8">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || {
                                !loading.get() && entries.with(|e| e.is_empty())
                            }>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "Nobody has made the board yet."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                entries
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, entry)| view! {
                                        <tr>
                                            <td class="font-bold">{i + 1}</td>
                                            <td>
                                                {entry.character_name}
                                                <span class="text-base-content/50 text-xs">
                                                    " (" {entry.class_name} ")"
                                                </span>
                                            </td>
                                            <td>{entry.username}</td>
                                            <td>{entry.level}</td>
                                            <td>{entry.experience}</td>
                                            <td>{entry.gold}</td>
                                            <td>{entry.quests_completed}</td>
                                        </tr>
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
