//! History-API router with the auth guard built in.
//!
//! All `window.history` access is concentrated here. Navigation follows a
//! request -> guard -> commit flow: the target route is checked against the
//! injected authentication signal before the URL and the route signal are
//! updated. Denied visits to protected pages are reported through the
//! injected `on_denied` hook so the app can record a post-login bounce-back
//! target without this module knowing about session storage.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::log;
use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Signal-driven router service, shared through the reactive context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected auth check; keeps the router decoupled from the auth module.
    is_authenticated: Signal<bool>,
    /// Called with the denied route before redirecting to login.
    on_denied: fn(AppRoute),
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, on_denied: fn(AppRoute)) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            on_denied,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        if target_route.requires_auth() && !is_auth {
            log::info("[router] access denied, redirecting to login");
            if target_route.remember_on_denial() {
                (self.on_denied)(target_route);
            }
            self.commit(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        if target_route.should_redirect_when_authenticated() && is_auth {
            log::info("[router] already authenticated, redirecting to dashboard");
            self.commit(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        self.commit(target_route, use_push);
    }

    fn commit(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons go through the same guard as programmatic
    /// navigation, but rewrite history instead of pushing.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let on_denied = self.on_denied;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            if target_route.requires_auth() && !is_auth {
                if target_route.remember_on_denial() {
                    on_denied(target_route);
                }
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// Redirects automatically when the auth state flips while the user sits
    /// on a page that no longer matches it.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            } else if route.requires_auth() {
                log::info("[router] session ended, redirecting to login");
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>, on_denied: fn(AppRoute)) -> RouterService {
    let router = RouterService::new(is_authenticated, on_denied);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

/// Router root; provides the service to the whole tree.
#[component]
pub fn Router(
    /// Auth state injected from the auth context.
    is_authenticated: Signal<bool>,
    /// Hook invoked with the route a logged-out visitor was denied.
    on_denied: fn(AppRoute),
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, on_denied);
    children()
}

/// Renders whatever view the matcher returns for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
