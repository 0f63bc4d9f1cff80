//! QuestForge frontend application.
//!
//! Context-driven layout:
//! - `web::route` / `web::router`: route table and guard engine
//! - `auth` / `player`: shared session and character state
//! - `claims` / `session`: token inspection and durable storage
//! - `api`: backend client
//! - `components`: pages

mod api;
mod auth;
mod claims;
mod components;
mod player;
mod session;
pub(crate) mod web;

use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::Navbar;
use crate::components::add_character::AddCharacterPage;
use crate::components::admin::AdminDashboardPage;
use crate::components::characters::CharactersPage;
use crate::components::dashboard::DashboardPage;
use crate::components::guard::AdminGuard;
use crate::components::home::HomePage;
use crate::components::leaderboard::LeaderboardPage;
use crate::components::login::LoginPage;
use crate::components::logout::LogoutPage;
use crate::components::quests::QuestsPage;
use crate::components::register::RegisterPage;
use crate::components::verify::VerifyResultPage;
use crate::player::PlayerContext;
use crate::session::Session;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Wraps an authenticated page with the persistent navigation bar.
fn shell(page: AnyView) -> AnyView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            {page}
        </div>
    }
    .into_any()
}

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::VerifySuccess => view! { <VerifyResultPage success=true /> }.into_any(),
        AppRoute::VerifyFailed => view! { <VerifyResultPage success=false /> }.into_any(),
        AppRoute::Dashboard => shell(view! { <DashboardPage /> }.into_any()),
        AppRoute::Characters => shell(view! { <CharactersPage /> }.into_any()),
        AppRoute::AddCharacter => shell(view! { <AddCharacterPage /> }.into_any()),
        AppRoute::Quests => shell(view! { <QuestsPage /> }.into_any()),
        AppRoute::Leaderboard => shell(view! { <LeaderboardPage /> }.into_any()),
        AppRoute::Admin => shell(
            view! {
                <AdminGuard>
                    <AdminDashboardPage />
                </AdminGuard>
            }
            .into_any(),
        ),
        AppRoute::Logout => view! { <LogoutPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"This page does not exist."</p>
                    <a class="link link-primary mt-4 inline-block" href="/">
                        "Back to safety"
                    </a>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Records the page a logged-out visitor was denied, so login can bounce
/// back to it.
fn record_denied_route(route: AppRoute) {
    Session::set_return_path(route.to_path());
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    let player_ctx = PlayerContext::new();
    provide_context(player_ctx);

    // Restore a previous session from storage before the first route
    // resolves.
    auth::init_session(&auth_ctx, &player_ctx);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated on_denied=record_denied_route>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
