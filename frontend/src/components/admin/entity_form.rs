//! Shared create/edit modal for the admin tabs, keyed by the item type in
//! the seed.

use leptos::prelude::*;
use questforge_shared::{CharacterTemplateUpsert, QuestUpsert};

use super::{AdminSave, EditorSeed};

#[component]
pub fn EntityForm(
    seed: Signal<Option<EditorSeed>>,
    #[prop(into)] on_save: Callback<AdminSave>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // Character fields
    let (name, set_name) = signal(String::new());
    let (class_name, set_class_name) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());

    // Quest fields
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (experience_reward, set_experience_reward) = signal(0i64);
    let (gold_reward, set_gold_reward) = signal(0i64);
    let (required_level, set_required_level) = signal(1i32);

    // Seed changes repopulate the fields and drive the dialog element.
    Effect::new(move |_| {
        let current = seed.get();
        match &current {
            Some(EditorSeed::NewCharacter) => {
                set_name.set(String::new());
                set_class_name.set(String::new());
                set_image_url.set(String::new());
            }
            Some(EditorSeed::EditCharacter(template)) => {
                set_name.set(template.name.clone());
                set_class_name.set(template.class_name.clone());
                set_image_url.set(template.image_url.clone().unwrap_or_default());
            }
            Some(EditorSeed::NewQuest) => {
                set_title.set(String::new());
                set_description.set(String::new());
                set_experience_reward.set(0);
                set_gold_reward.set(0);
                set_required_level.set(1);
            }
            Some(EditorSeed::EditQuest(quest)) => {
                set_title.set(quest.title.clone());
                set_description.set(quest.description.clone());
                set_experience_reward.set(quest.experience_reward);
                set_gold_reward.set(quest.gold_reward);
                set_required_level.set(quest.required_level);
            }
            None => {}
        }
        if let Some(dialog) = dialog_ref.get() {
            if current.is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let character_form = move || CharacterTemplateUpsert {
        name: name.get_untracked().trim().to_string(),
        class_name: class_name.get_untracked().trim().to_string(),
        image_url: {
            let url = image_url.get_untracked();
            if url.trim().is_empty() { None } else { Some(url) }
        },
    };

    let quest_form = move || QuestUpsert {
        title: title.get_untracked().trim().to_string(),
        description: description.get_untracked().trim().to_string(),
        experience_reward: experience_reward.get_untracked(),
        gold_reward: gold_reward.get_untracked(),
        required_level: required_level.get_untracked(),
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let save = match seed.get_untracked() {
            Some(EditorSeed::NewCharacter) => AdminSave::Character {
                id: None,
                form: character_form(),
            },
            Some(EditorSeed::EditCharacter(template)) => AdminSave::Character {
                id: Some(template.character_id),
                form: character_form(),
            },
            Some(EditorSeed::NewQuest) => AdminSave::Quest {
                id: None,
                form: quest_form(),
            },
            Some(EditorSeed::EditQuest(quest)) => AdminSave::Quest {
                id: Some(quest.quest_id),
                form: quest_form(),
            },
            None => return,
        };
        on_save.run(save);
    };

    let is_character = move || {
        matches!(
            seed.get(),
            Some(EditorSeed::NewCharacter | EditorSeed::EditCharacter(_))
        )
    };

    let heading = move || match seed.get() {
        Some(EditorSeed::NewCharacter) => "New character template",
        Some(EditorSeed::EditCharacter(_)) => "Edit character template",
        Some(EditorSeed::NewQuest) => "New quest",
        Some(EditorSeed::EditQuest(_)) => "Edit quest",
        None => "",
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{heading}</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show
                        when=is_character
                        fallback=move || view! {
                            <div class="form-control">
                                <label class="label" for="quest-title">
                                    <span class="label-text">"Title"</span>
                                </label>
                                <input id="quest-title" required
                                    type="text"
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                    prop:value=title
                                    class="input input-bordered w-full"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="quest-desc">
                                    <span class="label-text">"Description"</span>
                                </label>
                                <textarea id="quest-desc" required
                                    class="textarea textarea-bordered w-full"
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                    prop:value=description
                                ></textarea>
                            </div>
                            <div class="grid grid-cols-3 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"XP reward"</span>
                                    </label>
                                    <input type="number" min="0" required
                                        class="input input-bordered w-full"
                                        prop:value=move || experience_reward.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<i64>() {
                                                set_experience_reward.set(v);
                                            }
                                        }
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Gold reward"</span>
                                    </label>
                                    <input type="number" min="0" required
                                        class="input input-bordered w-full"
                                        prop:value=move || gold_reward.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<i64>() {
                                                set_gold_reward.set(v);
                                            }
                                        }
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"Min level"</span>
                                    </label>
                                    <input type="number" min="1" required
                                        class="input input-bordered w-full"
                                        prop:value=move || required_level.get().to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                                                set_required_level.set(v);
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        }
                    >
                        <div class="form-control">
                            <label class="label" for="tpl-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input id="tpl-name" required
                                type="text"
                                placeholder="Aldric"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="tpl-class">
                                <span class="label-text">"Class"</span>
                            </label>
                            <input id="tpl-class" required
                                type="text"
                                placeholder="Knight"
                                on:input=move |ev| set_class_name.set(event_target_value(&ev))
                                prop:value=class_name
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="tpl-image">
                                <span class="label-text">"Image URL (optional)"</span>
                            </label>
                            <input id="tpl-image"
                                type="text"
                                placeholder="https://..."
                                on:input=move |ev| set_image_url.set(event_target_value(&ev))
                                prop:value=image_url
                                class="input input-bordered w-full"
                            />
                        </div>
                    </Show>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
