//! `storefront-core` — catalog pipeline building blocks.
//!
//! This crate contains the **target-independent** storefront logic: decoding the
//! product catalog, turning products into cards, deciding purchase affordances and
//! tracking scroll reveals. Browser bindings live in `storefront-web`; nothing here
//! touches the DOM directly.

pub mod card;
pub mod config;
pub mod contact;
pub mod error;
pub mod grid;
pub mod loader;
pub mod nav;
pub mod product;
pub mod purchase;
pub mod reveal;
pub mod storefront;
pub mod widget;

pub use card::{CardImage, PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE_ALT, ProductCard, build_cards};
pub use config::{RevealOptions, StoreConfig};
pub use contact::{
    ContactError, ContactForm, ContactSubmission, ContactSubmitter, FormMessage, MessageKind,
    SimulatedSubmitter,
};
pub use error::{CatalogError, CatalogResult};
pub use grid::{CardContainer, GridStatus, StaticGrid};
pub use loader::{CatalogSource, RawResponse, load_catalog};
pub use product::{Catalog, Product, ProductId};
pub use purchase::{PayhipId, PurchaseAffordance, extract_payhip_id};
pub use reveal::{RevealObserver, RevealState, RevealTracker, StaticReveal};
pub use storefront::{LoadState, StoreContext};
pub use widget::{OptionalWidget, PurchaseWidget, WidgetInit};
