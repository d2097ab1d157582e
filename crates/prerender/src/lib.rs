//! `storefront-prerender`
//!
//! **Responsibility:** render the product grid ahead of time.
//!
//! Runs the same catalog pipeline as the browser, against an HTTP or file source,
//! and produces the grid as a static HTML fragment. There is no scroll in a static
//! document, so every card is emitted in its revealed state.

pub mod settings;
pub mod source;

pub use settings::{Settings, SettingsError};
pub use source::{FileSource, HttpSource, Source};

use storefront_core::{
    CatalogSource, LoadState, RevealTracker, StaticGrid, StoreConfig, StoreContext,
};

/// Result of one prerender run.
#[derive(Debug, Clone)]
pub struct Prerendered {
    pub state: LoadState,
    pub card_count: usize,
    /// Grid contents: cards, or the error indicator when the catalog was unavailable.
    pub html: String,
}

/// Load the catalog from `source` and render the grid.
pub async fn prerender<S>(source: &S, config: StoreConfig) -> Prerendered
where
    S: CatalogSource,
{
    let mut ctx = StoreContext::new(config);
    let mut grid = StaticGrid::new();
    let mut tracker = RevealTracker::new(ctx.config().reveal_threshold);

    let state = ctx.run(source, &mut grid, &mut tracker).await;
    for index in tracker.reveal_all() {
        grid.mark_revealed(index);
    }

    tracing::info!(?state, cards = grid.card_count(), "grid prerendered");
    Prerendered {
        state,
        card_count: grid.card_count(),
        html: grid.to_html(),
    }
}
