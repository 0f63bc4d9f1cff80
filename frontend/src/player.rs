//! Shared player context.
//!
//! One instance lives at the app root for the whole page lifetime. It holds
//! the authenticated identity, the admin flag, and the selected character,
//! and it is the only writer of the selected-character snapshot: selection
//! is always a full replace, in memory and in session storage together.

use leptos::prelude::*;
use questforge_shared::Character;

use crate::api::{ApiError, QuestForgeApi};
use crate::session::Session;

#[derive(Clone, Default)]
pub struct PlayerState {
    pub subject_id: Option<String>,
    /// `None` until the identity has been resolved; the admin guard shows a
    /// neutral loading state instead of guessing.
    pub is_admin: Option<bool>,
    pub selected: Option<Character>,
}

#[derive(Clone, Copy)]
pub struct PlayerContext {
    state: ReadSignal<PlayerState>,
    set_state: WriteSignal<PlayerState>,
}

impl PlayerContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(PlayerState::default());
        Self { state, set_state }
    }

    pub fn selected_signal(&self) -> Signal<Option<Character>> {
        let state = self.state;
        Signal::derive(move || state.get().selected)
    }

    pub fn admin_signal(&self) -> Signal<Option<bool>> {
        let state = self.state;
        Signal::derive(move || state.get().is_admin)
    }

    pub fn subject_id(&self) -> Option<String> {
        self.state.get_untracked().subject_id
    }

    pub fn selected(&self) -> Option<Character> {
        self.state.get_untracked().selected
    }

    pub fn set_identity(&self, subject_id: Option<String>, is_admin: bool) {
        self.set_state.update(|s| {
            s.subject_id = subject_id;
            s.is_admin = Some(is_admin);
        });
    }

    /// Replaces the selection and persists the snapshot in the same breath.
    pub fn set_selected(&self, character: Option<Character>) {
        Session::set_selected_character(character.as_ref());
        self.set_state.update(|s| s.selected = character);
    }

    /// Re-fetches the authoritative selection from the backend and replaces
    /// the local value. Used after anything that may have changed character
    /// state elsewhere (quest rewards, selection on another page).
    pub async fn refresh_data(&self, api: &QuestForgeApi) -> Result<(), ApiError> {
        let selected = api.selected_character().await?;
        self.set_selected(selected);
        Ok(())
    }

    /// Resets every field to its empty default. Logout calls this.
    pub fn clear_user_data(&self) {
        self.set_state.set(PlayerState::default());
    }
}

pub fn use_player() -> PlayerContext {
    use_context::<PlayerContext>().expect("PlayerContext should be provided")
}
