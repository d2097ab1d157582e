//! Storefront configuration.
//!
//! Every tunable of the page lives here. Defaults match the shipped site; an
//! override document can be embedded as JSON (camelCase keys, all optional).

use serde::Deserialize;

use crate::error::CatalogError;

/// Page-wide configuration constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Resource path of the catalog document.
    pub products_file: String,
    /// Per-card transition stagger.
    pub animation_delay_ms: u64,
    /// Vertical inset of the reveal viewport.
    pub scroll_offset_px: u32,
    /// Intersection ratio an element must reach before it is revealed.
    pub reveal_threshold: f64,
    /// Contact form endpoint (`#` means simulated submission).
    pub form_endpoint: String,
    pub contact_submit_delay_ms: u64,
    pub form_message_ttl_ms: u64,
    /// Scroll depth after which the navbar turns opaque.
    pub navbar_solid_after_px: f64,
    /// Viewport width above which the mobile menu is force-closed.
    pub mobile_breakpoint_px: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            products_file: "products.json".to_string(),
            animation_delay_ms: 100,
            scroll_offset_px: 100,
            reveal_threshold: 0.1,
            form_endpoint: "#".to_string(),
            contact_submit_delay_ms: 2000,
            form_message_ttl_ms: 5000,
            navbar_solid_after_px: 50.0,
            mobile_breakpoint_px: 768.0,
        }
    }
}

impl StoreConfig {
    /// Parse an override document; missing keys keep their defaults.
    pub fn from_json(doc: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(doc).map_err(|e| CatalogError::malformed(format!("config: {e}")))
    }

    /// Presentation delay of the card at `index`.
    pub fn card_delay_ms(&self, index: usize) -> u64 {
        index as u64 * self.animation_delay_ms
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.reveal_threshold,
            root_margin: format!("-{}px 0px", self.scroll_offset_px),
        }
    }
}

/// Options shared by the single reveal observer of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// CSS margin string applied to the observer root.
    pub root_margin: String,
}
