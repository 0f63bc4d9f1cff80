//! Admin back-office: users (read-only), character catalog, and quests.

mod entity_form;

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use questforge_shared::{
    AdminUser, CharacterTemplate, CharacterTemplateUpsert, Quest, QuestUpsert,
};

use crate::api::ApiError;
use crate::auth::{self, use_auth};
use crate::player::use_player;
use crate::web;
use entity_form::EntityForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Characters,
    Quests,
}

/// What the shared modal form is currently editing.
#[derive(Clone, PartialEq)]
pub enum EditorSeed {
    NewCharacter,
    EditCharacter(CharacterTemplate),
    NewQuest,
    EditQuest(Quest),
}

/// Save request produced by the modal form. `id: None` means create.
#[derive(Clone)]
pub enum AdminSave {
    Character {
        id: Option<i64>,
        form: CharacterTemplateUpsert,
    },
    Quest {
        id: Option<i64>,
        form: QuestUpsert,
    },
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();

    let (tab, set_tab) = signal(AdminTab::Users);
    let (users, set_users) = signal(Vec::<AdminUser>::new());
    let (catalog, set_catalog) = signal(Vec::<CharacterTemplate>::new());
    let (quests, set_quests) = signal(Vec::<Quest>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None);
    let (seed, set_seed) = signal(Option::<EditorSeed>::None);
    let (reset_token, set_reset_token) = signal(String::new());

    // The three lists are independent; fetch them concurrently and render
    // once everything has settled.
    let load_all = move || {
        let Some(api) = auth.api() else { return };
        set_loading.set(true);
        spawn_local(async move {
            let (users_res, catalog_res, quests_res) =
                join!(api.admin_users(), api.character_catalog(), api.quests());

            let mut first_error = None;
            match users_res {
                Ok(list) => set_users.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }
            match catalog_res {
                Ok(list) => set_catalog.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }
            match quests_res {
                Ok(list) => set_quests.set(list),
                Err(e) => first_error = first_error.or(Some(e)),
            }
            match first_error {
                Some(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Some(e) => set_notice.set(Some((e.to_string(), true))),
                None => {}
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_all());

    Effect::new(move |_| {
        if notice.get().is_some_and(|(_, is_err)| !is_err) {
            set_timeout(
                move || set_notice.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let handle_save = move |save: AdminSave| {
        let Some(api) = auth.api() else { return };
        set_seed.set(None);
        spawn_local(async move {
            let result: Result<(), ApiError> = async {
                match &save {
                    AdminSave::Character { id: None, form } => {
                        api.create_catalog_character(form).await?
                    }
                    AdminSave::Character { id: Some(id), form } => {
                        api.update_catalog_character(*id, form).await?
                    }
                    AdminSave::Quest { id: None, form } => api.create_quest(form).await?,
                    AdminSave::Quest { id: Some(id), form } => {
                        api.update_quest(*id, form).await?
                    }
                }
                // Refresh only the list that changed.
                match &save {
                    AdminSave::Character { .. } => set_catalog.set(api.character_catalog().await?),
                    AdminSave::Quest { .. } => set_quests.set(api.quests().await?),
                }
                Ok(())
            }
            .await;
            match result {
                Ok(()) => set_notice.set(Some(("Saved.".to_string(), false))),
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_notice.set(Some((e.to_string(), true))),
            }
        });
    };

    let handle_delete_character = move |template: CharacterTemplate| {
        if !web::confirm(&format!("Delete the template \"{}\"?", template.name)) {
            return;
        }
        let Some(api) = auth.api() else { return };
        let id = template.character_id;
        spawn_local(async move {
            match api.delete_catalog_character(id).await {
                Ok(()) => {
                    set_catalog.update(|list| list.retain(|t| t.character_id != id));
                    set_notice.set(Some(("Template deleted.".to_string(), false)));
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_notice.set(Some((e.to_string(), true))),
            }
        });
    };

    let handle_delete_quest = move |quest: Quest| {
        if !web::confirm(&format!("Delete the quest \"{}\"?", quest.title)) {
            return;
        }
        let Some(api) = auth.api() else { return };
        let id = quest.quest_id;
        spawn_local(async move {
            match api.delete_quest(id).await {
                Ok(()) => {
                    set_quests.update(|list| list.retain(|q| q.quest_id != id));
                    set_notice.set(Some(("Quest deleted.".to_string(), false)));
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_notice.set(Some((e.to_string(), true))),
            }
        });
    };

    let handle_dev_reset = move |_| {
        if !web::confirm("Wipe ALL data on the backend? This is for development only.") {
            return;
        }
        let Some(api) = auth.api() else { return };
        let token = reset_token.get_untracked();
        spawn_local(async move {
            match api.dev_reset(token).await {
                Ok(()) => {
                    set_notice.set(Some(("Backend data reset.".to_string(), false)));
                    load_all();
                }
                Err(ApiError::Unauthorized) => auth::expire_session(auth, player),
                Err(e) => set_notice.set(Some((e.to_string(), true))),
            }
        });
    };

    let tab_class = move |t: AdminTab| {
        if tab.get() == t {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
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
                    <h1 class="text-2xl font-bold">"Admin dashboard"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Manage users, the character catalog, and quests."
                    </p>
                </div>
                <button
                    class="btn btn-ghost btn-circle"
                    disabled=move || loading.get()
                    on:click=move |_| load_all()
                >
                    "↻"
                </button>
            </div>

            <div role="tablist" class="tabs tabs-boxed w-fit">
                <a role="tab" class=move || tab_class(AdminTab::Users)
                    on:click=move |_| set_tab.set(AdminTab::Users)>"Users"</a>
                <a role="tab" class=move || tab_class(AdminTab::Characters)
                    on:click=move |_| set_tab.set(AdminTab::Characters)>"Characters"</a>
                <a role="tab" class=move || tab_class(AdminTab::Quests)
                    on:click=move |_| set_tab.set(AdminTab::Quests)>"Quests"</a>
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            // Users: read-only.
            <Show when=move || !loading.get() && tab.get() == AdminTab::Users>
                <div class="card bg-base-100 shadow">
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || users.get()
                                    key=|u| u.user_id
                                    children=move |user| view! {
                                        <tr>
                                            <td>{user.user_id}</td>
                                            <td>{user.username}</td>
                                            <td>{user.email}</td>
                                            <td>
                                                <span class="badge badge-outline">{user.role}</span>
                                            </td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </Show>

            // Character catalog CRUD.
            <Show when=move || !loading.get() && tab.get() == AdminTab::Characters>
                <div class="card bg-base-100 shadow">
                    <div class="card-body p-0">
                        <div class="flex justify-end p-4 pb-0">
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| set_seed.set(Some(EditorSeed::NewCharacter))
                            >
                                "New character"
                            </button>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Class"</th>
                                        <th>"Image"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || catalog.get()
                                        key=|t| t.character_id
                                        children=move |template| {
                                            let edit_target = template.clone();
                                            let delete_target = template.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{template.name.clone()}</td>
                                                    <td>{template.class_name.clone()}</td>
                                                    <td class="text-xs opacity-60">
                                                        {template.image_url.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| set_seed.set(Some(
                                                                EditorSeed::EditCharacter(edit_target.clone()),
                                                            ))
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            on:click=move |_| handle_delete_character(delete_target.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </Show>

            // Quest CRUD.
            <Show when=move || !loading.get() && tab.get() == AdminTab::Quests>
                <div class="card bg-base-100 shadow">
                    <div class="card-body p-0">
                        <div class="flex justify-end p-4 pb-0">
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| set_seed.set(Some(EditorSeed::NewQuest))
                            >
                                "New quest"
                            </button>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"XP"</th>
                                        <th>"Gold"</th>
                                        <th>"Min level"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || quests.get()
                                        key=|q| q.quest_id
                                        children=move |quest| {
                                            let edit_target = quest.clone();
                                            let delete_target = quest.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{quest.title.clone()}</td>
                                                    <td>{quest.experience_reward}</td>
                                                    <td>{quest.gold_reward}</td>
                                                    <td>{quest.required_level}</td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| set_seed.set(Some(
                                                                EditorSeed::EditQuest(edit_target.clone()),
                                                            ))
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            on:click=move |_| handle_delete_quest(delete_target.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </Show>

            // Development-only danger zone.
            <div class="card bg-base-100 shadow border border-error/30">
                <div class="card-body">
                    <h2 class="card-title text-error">"Danger zone"</h2>
                    <p class="text-sm text-base-content/70">
                        "Reset all backend data. Only works against a development backend."
                    </p>
                    <div class="join">
                        <input
                            type="password"
                            placeholder="Reset token"
                            class="input input-bordered join-item"
                            on:input=move |ev| set_reset_token.set(event_target_value(&ev))
                            prop:value=reset_token
                        />
                        <button
                            class="btn btn-error join-item"
                            disabled=move || reset_token.get().trim().is_empty()
                            on:click=handle_dev_reset
                        >
                            "Reset data"
                        </button>
                    </div>
                </div>
            </div>

            <EntityForm
                seed=seed.into()
                on_save=handle_save
                on_close=move |_| set_seed.set(None)
            />
        </div>
    }
}
