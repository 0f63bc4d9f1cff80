//! Authentication state and the login/logout transitions.
//!
//! The route guard never sees tokens; it only reads the boolean signal
//! exposed here. This module owns the transitions between the stored token,
//! the decoded claims, and the player context.

use leptos::prelude::*;
use questforge_shared::{RegisterRequest, RegisterResponse};

use crate::api::QuestForgeApi;
use crate::claims::{self, TokenStatus};
use crate::player::PlayerContext;
use crate::session::Session;
use crate::web::route::AppRoute;
use crate::web::{log, now_epoch_secs};

#[derive(Clone, Default)]
pub struct AuthState {
    /// API client bound to the current token; present only when
    /// authenticated.
    pub api: Option<QuestForgeApi>,
    pub is_authenticated: bool,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Boolean signal injected into the router for the guard.
    ///
    /// Derived, so every read re-checks the stored token's expiry: a session
    /// that dies mid-visit is denied at the next page entry, not at the next
    /// 401.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.get().is_authenticated
                && token_is_live(Session::token().as_deref(), now_epoch_secs())
        })
    }

    /// Snapshot of the authenticated API client, if any.
    pub fn api(&self) -> Option<QuestForgeApi> {
        self.state.get_untracked().api
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// True while a token decodes and its expiry has not passed.
fn token_is_live(token: Option<&str>, now_secs: u64) -> bool {
    matches!(TokenStatus::of(token, now_secs), TokenStatus::Valid(_))
}

/// Restores the session from storage on startup. An expired or malformed
/// stored token is scrubbed immediately; there is no silent
/// re-authentication path (the backend issues tokens only for credentials
/// presented by the user).
pub fn init_session(auth: &AuthContext, player: &PlayerContext) {
    match TokenStatus::of(Session::token().as_deref(), now_epoch_secs()) {
        TokenStatus::Valid(claims) => {
            player.set_identity(claims.subject_id().map(str::to_string), claims.is_admin());
            if let Some(snapshot) = Session::selected_character() {
                player.set_selected(Some(snapshot));
            }
            auth.set_state.update(|s| {
                s.api = Some(QuestForgeApi::from_session());
                s.is_authenticated = true;
            });
        }
        TokenStatus::Invalid => {
            log::info("[auth] stored token is expired or malformed, clearing it");
            Session::clear_auth(None);
        }
        TokenStatus::Missing => {}
    }
}

/// Logs in, stores the token, resolves the previously selected character
/// (snapshot first, backend second), and returns where to navigate next.
pub async fn login(
    auth: AuthContext,
    player: PlayerContext,
    email: String,
    password: String,
) -> Result<AppRoute, String> {
    let response = QuestForgeApi::anonymous()
        .login(email.clone(), password)
        .await
        .map_err(|e| e.to_string())?;

    Session::set_token(&response.token);
    Session::set_user_email(&email);

    let decoded = claims::decode(&response.token);
    player.set_identity(
        decoded
            .as_ref()
            .and_then(|c| c.subject_id())
            .map(str::to_string),
        decoded.as_ref().is_some_and(|c| c.is_admin()),
    );

    let api = QuestForgeApi::from_session();
    let selected = match Session::selected_character() {
        Some(snapshot) => Some(snapshot),
        // A failure here must not block the login; the characters page can
        // recover.
        None => api.selected_character().await.ok().flatten(),
    };
    let has_selection = selected.is_some();
    player.set_selected(selected);

    auth.set_state.update(|s| {
        s.api = Some(api);
        s.is_authenticated = true;
    });

    Ok(post_login_destination(
        Session::take_return_path().as_deref(),
        has_selection,
    ))
}

/// Registers a new account. The backend sends a verification email; the
/// user logs in afterwards, with the onboarding flag set for the dashboard.
pub async fn register(request: RegisterRequest) -> Result<RegisterResponse, String> {
    let response = QuestForgeApi::anonymous()
        .register(&request)
        .await
        .map_err(|e| e.to_string())?;
    Session::set_user_email(&request.email);
    Session::mark_new_user();
    Ok(response)
}

/// Clears the token, every character-related storage key, and both
/// contexts. The router's auth effect performs the redirect.
pub fn logout(auth: AuthContext, player: PlayerContext) {
    Session::clear_auth(player.subject_id().as_deref());
    player.clear_user_data();
    auth.set_state.update(|s| {
        s.api = None;
        s.is_authenticated = false;
    });
}

/// Uniform 401 handling: any page that receives `ApiError::Unauthorized`
/// funnels through here.
pub fn expire_session(auth: AuthContext, player: PlayerContext) {
    log::info("[auth] backend rejected the session token");
    logout(auth, player);
}

/// Where to land after a successful login: the recorded pre-login
/// destination wins, then the dashboard when a character is selected,
/// otherwise the character picker.
fn post_login_destination(return_path: Option<&str>, has_selection: bool) -> AppRoute {
    if let Some(path) = return_path {
        let route = AppRoute::from_path(path);
        if route.remember_on_denial() {
            return route;
        }
    }
    if has_selection {
        AppRoute::Dashboard
    } else {
        AppRoute::Characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_expiring_at(exp: u64) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(format!(r#"{{"nameid":"1","exp":{exp}}}"#))
        )
    }

    #[test]
    fn expired_token_is_denied_at_navigation_time() {
        let token = token_expiring_at(1_000);
        assert!(token_is_live(Some(&token), 999));
        // The token expires while the user sits on a page; the very next
        // guard check must treat the session as over.
        assert!(!token_is_live(Some(&token), 1_000));
        assert!(!token_is_live(Some(&token), 2_000));
        assert!(AppRoute::Quests.requires_auth());
    }

    #[test]
    fn missing_or_garbage_tokens_are_never_live() {
        assert!(!token_is_live(None, 0));
        assert!(!token_is_live(Some("garbage"), 0));
    }

    #[test]
    fn recorded_path_wins_over_defaults() {
        assert_eq!(
            post_login_destination(Some("/quests"), true),
            AppRoute::Quests
        );
        assert_eq!(
            post_login_destination(Some("/admin"), false),
            AppRoute::Admin
        );
    }

    #[test]
    fn selection_decides_between_dashboard_and_characters() {
        assert_eq!(post_login_destination(None, true), AppRoute::Dashboard);
        assert_eq!(post_login_destination(None, false), AppRoute::Characters);
    }

    #[test]
    fn unusable_return_paths_are_ignored() {
        // A stale record pointing at logout or a public page falls through.
        assert_eq!(
            post_login_destination(Some("/logout"), true),
            AppRoute::Dashboard
        );
        assert_eq!(
            post_login_destination(Some("/login"), false),
            AppRoute::Characters
        );
        assert_eq!(
            post_login_destination(Some("/bogus"), false),
            AppRoute::Characters
        );
    }
}
