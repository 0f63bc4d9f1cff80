//! Route table for the whole app.
//!
//! Pure: no DOM, no `web_sys`. The router engine consults the predicates
//! here to enforce the auth guard; the admin-only pages are additionally
//! gated by [`admin_only`](AppRoute::admin_only) via the `AdminGuard`
//! component, since the admin flag lives in the player context rather than
//! in the token-presence check the router performs.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing page (default route).
    #[default]
    Home,
    Login,
    Register,
    /// Email verification outcome pages; the backend redirects here.
    VerifySuccess,
    VerifyFailed,
    Dashboard,
    Characters,
    AddCharacter,
    Quests,
    Leaderboard,
    Admin,
    Logout,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/verify/success" => Self::VerifySuccess,
            "/verify/failed" => Self::VerifyFailed,
            "/dashboard" => Self::Dashboard,
            "/characters" => Self::Characters,
            "/characters/new" => Self::AddCharacter,
            "/quests" => Self::Quests,
            "/leaderboard" => Self::Leaderboard,
            "/admin" => Self::Admin,
            "/logout" => Self::Logout,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::VerifySuccess => "/verify/success",
            Self::VerifyFailed => "/verify/failed",
            Self::Dashboard => "/dashboard",
            Self::Characters => "/characters",
            Self::AddCharacter => "/characters/new",
            Self::Quests => "/quests",
            Self::Leaderboard => "/leaderboard",
            Self::Admin => "/admin",
            Self::Logout => "/logout",
            Self::NotFound => "/404",
        }
    }

    /// Whether the route sits behind the auth guard.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Characters
                | Self::AddCharacter
                | Self::Quests
                | Self::Leaderboard
                | Self::Admin
                | Self::Logout
        )
    }

    /// Whether the route additionally requires the admin flag.
    pub fn admin_only(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether a denied visit should be recorded for a post-login
    /// bounce-back. Logout is excluded: bouncing back into logout after a
    /// fresh login would immediately end the new session.
    pub fn remember_on_denial(&self) -> bool {
        self.requires_auth() && !matches!(self, Self::Logout)
    }

    /// Routes an authenticated user has no business on (the auth forms).
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 13] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::VerifySuccess,
        AppRoute::VerifyFailed,
        AppRoute::Dashboard,
        AppRoute::Characters,
        AppRoute::AddCharacter,
        AppRoute::Quests,
        AppRoute::Leaderboard,
        AppRoute::Admin,
        AppRoute::Logout,
        AppRoute::NotFound,
    ];

    #[test]
    fn paths_round_trip() {
        for route in ALL {
            if route == AppRoute::NotFound {
                continue;
            }
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin/secrets"), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    }

    #[test]
    fn protected_set_is_exactly_the_signed_in_pages() {
        let protected: Vec<_> = ALL.iter().filter(|r| r.requires_auth()).collect();
        assert_eq!(protected.len(), 7);
        for route in [AppRoute::Home, AppRoute::Login, AppRoute::Register] {
            assert!(!route.requires_auth());
        }
    }

    #[test]
    fn only_admin_route_is_admin_only() {
        for route in ALL {
            assert_eq!(route.admin_only(), route == AppRoute::Admin);
        }
    }

    #[test]
    fn logout_is_never_a_bounce_back_target() {
        assert!(AppRoute::Logout.requires_auth());
        assert!(!AppRoute::Logout.remember_on_denial());
        assert!(AppRoute::Quests.remember_on_denial());
    }

    #[test]
    fn auth_forms_redirect_when_authenticated() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
