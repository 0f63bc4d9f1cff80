//! Typed session repository over LocalStorage.
//!
//! Every durable key the app touches is named here, once. Pages never reach
//! for key strings directly; they go through these accessors, and logout
//! clears everything auth- or character-related in one call.

use questforge_shared::Character;

use crate::web::{LocalStorage, log};

const KEY_AUTH_TOKEN: &str = "authToken";
const KEY_SELECTED_CHARACTER: &str = "selectedCharacter";
const KEY_USER_EMAIL: &str = "userEmail";
const KEY_NEW_USER: &str = "newUser";
const KEY_RETURN_PATH: &str = "returnPath";

// Written by older builds; scrubbed on every logout so stale installs get
// cleaned up. The cached-password reauth path was removed deliberately.
const KEY_LEGACY_TEMP_PASSWORD: &str = "tempAuthPassword";
const LEGACY_SELECTED_PREFIX: &str = "selectedCharacter_";

pub struct Session;

impl Session {
    pub fn token() -> Option<String> {
        LocalStorage::get(KEY_AUTH_TOKEN)
    }

    pub fn set_token(token: &str) {
        LocalStorage::set(KEY_AUTH_TOKEN, token);
    }

    /// The locally mirrored selected-character snapshot. A snapshot that no
    /// longer parses is dropped rather than surfaced.
    pub fn selected_character() -> Option<Character> {
        let raw = LocalStorage::get(KEY_SELECTED_CHARACTER)?;
        match serde_json::from_str(&raw) {
            Ok(character) => Some(character),
            Err(e) => {
                log::warn(&format!("discarding unreadable character snapshot: {e}"));
                LocalStorage::delete(KEY_SELECTED_CHARACTER);
                None
            }
        }
    }

    pub fn set_selected_character(character: Option<&Character>) {
        match character {
            Some(character) => {
                if let Ok(json) = serde_json::to_string(character) {
                    LocalStorage::set(KEY_SELECTED_CHARACTER, &json);
                }
            }
            None => {
                LocalStorage::delete(KEY_SELECTED_CHARACTER);
            }
        }
    }

    /// Kept across logouts so the login form can prefill the email.
    pub fn user_email() -> Option<String> {
        LocalStorage::get(KEY_USER_EMAIL)
    }

    pub fn set_user_email(email: &str) {
        LocalStorage::set(KEY_USER_EMAIL, email);
    }

    pub fn mark_new_user() {
        LocalStorage::set(KEY_NEW_USER, "1");
    }

    /// Consumes the onboarding flag; true exactly once per registration.
    pub fn take_new_user() -> bool {
        let set = LocalStorage::get(KEY_NEW_USER).is_some();
        if set {
            LocalStorage::delete(KEY_NEW_USER);
        }
        set
    }

    pub fn set_return_path(path: &str) {
        LocalStorage::set(KEY_RETURN_PATH, path);
    }

    /// Consumes the recorded pre-login destination.
    pub fn take_return_path() -> Option<String> {
        let path = LocalStorage::get(KEY_RETURN_PATH)?;
        LocalStorage::delete(KEY_RETURN_PATH);
        Some(path)
    }

    /// Multi-key sweep used by logout and by the uniform 401 handling.
    /// The email prefill survives; everything session-scoped goes.
    pub fn clear_auth(subject_id: Option<&str>) {
        for key in Self::auth_scoped_keys(subject_id) {
            LocalStorage::delete(&key);
        }
    }

    /// Every key `clear_auth` removes.
    fn auth_scoped_keys(subject_id: Option<&str>) -> Vec<String> {
        let mut keys = vec![
            KEY_AUTH_TOKEN.to_string(),
            KEY_SELECTED_CHARACTER.to_string(),
            KEY_NEW_USER.to_string(),
            KEY_RETURN_PATH.to_string(),
            KEY_LEGACY_TEMP_PASSWORD.to_string(),
        ];
        if let Some(id) = subject_id {
            keys.push(format!("{LEGACY_SELECTED_PREFIX}{id}"));
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_sweep_covers_token_and_character_keys() {
        let keys = Session::auth_scoped_keys(Some("42"));
        for expected in [
            "authToken",
            "selectedCharacter",
            "newUser",
            "returnPath",
            "tempAuthPassword",
            "selectedCharacter_42",
        ] {
            assert!(keys.iter().any(|k| k == expected), "missing {expected}");
        }
        // The email prefill is the one thing that survives a logout.
        assert!(!keys.iter().any(|k| k == KEY_USER_EMAIL));
    }

    #[test]
    fn sweep_without_subject_skips_the_per_user_key() {
        let keys = Session::auth_scoped_keys(None);
        assert!(!keys.iter().any(|k| k.starts_with(LEGACY_SELECTED_PREFIX)));
        assert!(keys.iter().any(|k| k == KEY_AUTH_TOKEN));
    }
}
