//! Thin wrappers over the native browser APIs.
//!
//! Every `web_sys` touchpoint lives behind this module so the rest of the
//! app is free of JsValue plumbing. Wrapping `fetch`/`localStorage`/History
//! directly (instead of pulling in the gloo-* crates) also keeps the WASM
//! binary small.

mod http;
pub mod log;
pub mod route;
pub mod router;
mod storage;

pub use http::{HttpClient, HttpError, HttpRequestBuilder, HttpResponse};
pub use storage::LocalStorage;

/// Native confirm dialog. `false` when the window is unavailable, so a
/// failed prompt can never green-light a destructive action.
#[allow(unused_variables)]
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Seconds since the Unix epoch, from `Date.now()` in the browser.
pub fn now_epoch_secs() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
