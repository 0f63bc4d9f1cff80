//! Admin-only gate.
//!
//! Narrower than the router's auth guard: it consults the admin flag in the
//! player context. While the flag is unresolved it renders a neutral
//! loading state rather than guessing either way.

use leptos::prelude::*;

use crate::player::use_player;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let player = use_player();
    let router = use_router();
    let is_admin = player.admin_signal();

    Effect::new(move |_| {
        if is_admin.get() == Some(false) {
            router.navigate(AppRoute::Dashboard);
        }
    });

    move || match is_admin.get() {
        Some(true) => children().into_any(),
        // The effect above is already navigating away; render nothing
        // meaningful in the meantime.
        Some(false) | None => view! {
            <div class="flex items-center justify-center min-h-[50vh]">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}
