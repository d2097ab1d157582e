//! Catalog source backed by `window.fetch`.

use storefront_core::{CatalogError, CatalogResult, CatalogSource, RawResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::js_error;

/// Fetches catalog documents relative to the page URL.
pub struct BrowserFetch {
    window: Window,
}

impl BrowserFetch {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl CatalogSource for BrowserFetch {
    async fn fetch(&self, path: &str) -> CatalogResult<RawResponse> {
        let response = JsFuture::from(self.window.fetch_with_str(path))
            .await
            .map_err(|e| CatalogError::transport(js_error(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| CatalogError::transport("fetch did not resolve to a Response"))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| CatalogError::transport(js_error(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| CatalogError::transport(js_error(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(RawResponse::new(status, body))
    }
}
