use leptos::prelude::*;

use crate::auth::{self, use_auth};
use crate::player::use_player;

/// Clears the session as soon as it renders. The router's auth effect
/// notices the state change and redirects to the login page.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let player = use_player();

    Effect::new(move |_| {
        auth::logout(auth, player);
    });

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
