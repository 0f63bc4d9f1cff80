//! Persistent navigation bar shown above every authenticated page.

use leptos::prelude::*;

use crate::player::use_player;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let router = use_router();
    let active = move || router.current_route().get() == route;

    view! {
        <li>
            <a
                class=move || if active() { "active" } else { "" }
                on:click=move |_| router.navigate(route)
            >
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let player = use_player();
    let router = use_router();

    let is_admin = player.admin_signal();
    let selected = player.selected_signal();

    view! {
        <div class="navbar bg-base-100 shadow-md">
            <div class="flex-1">
                <a
                    class="btn btn-ghost text-xl font-bold"
                    on:click=move |_| router.navigate(AppRoute::Dashboard)
                >
                    "QuestForge"
                </a>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1 gap-1">
                    <NavLink route=AppRoute::Dashboard label="Dashboard" />
                    <NavLink route=AppRoute::Characters label="Characters" />
                    <NavLink route=AppRoute::Quests label="Quests" />
                    <NavLink route=AppRoute::Leaderboard label="Leaderboard" />
                    <Show when=move || is_admin.get() == Some(true)>
                        <NavLink route=AppRoute::Admin label="Admin" />
                    </Show>
                </ul>
                <Show when=move || selected.get().is_some()>
                    <div class="badge badge-outline badge-primary mx-2 hidden md:inline-flex">
                        {move || {
                            selected
                                .get()
                                .map(|c| format!("{} · Lv {}", c.name, c.level))
                                .unwrap_or_default()
                        }}
                    </div>
                </Show>
                <button
                    class="btn btn-outline btn-error btn-sm mx-2"
                    on:click=move |_| router.navigate(AppRoute::Logout)
                >
                    "Log out"
                </button>
            </div>
        </div>
    }
}
