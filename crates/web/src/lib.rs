//! `storefront-web`
//!
//! **Responsibility:** browser frontend of the storefront page.
//!
//! This crate binds the `storefront-core` pipeline to the DOM:
//! - `fetch` as the catalog source
//! - `#products-grid` as the card container
//! - `IntersectionObserver` for scroll reveals (static reveal when unavailable)
//! - the Payhip global as the optional checkout widget
//! - page glue: navbar, mobile menu, smooth scrolling, contact form
//!
//! Everything here is `wasm32`-only; on other targets the crate is empty.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod contact;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod reveal;
#[cfg(target_arch = "wasm32")]
pub mod timer;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module loads.
///
/// Boots the page immediately if the DOM is already parsed, otherwise on
/// `DOMContentLoaded`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    storefront_observability::init_browser();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        page::listen(&document, "DOMContentLoaded", |_| app::boot());
    } else {
        app::boot();
    }
}

/// Render a thrown JS value for logs and error messages.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
