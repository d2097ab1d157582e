//! Page context and the catalog pipeline (load -> render -> animate).

use crate::card::{ProductCard, build_cards};
use crate::config::StoreConfig;
use crate::grid::{CardContainer, GridStatus};
use crate::loader::{CatalogSource, load_catalog};
use crate::product::Catalog;
use crate::reveal::RevealObserver;

/// Where the one catalog load of this page view stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    /// Collapsed outcome of every transport and format failure. Terminal.
    Unavailable,
}

/// State shared by the pipeline stages, constructed once per page.
///
/// The catalog is written at most once (on a successful load) and is read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct StoreContext {
    config: StoreConfig,
    catalog: Catalog,
    state: LoadState,
}

impl StoreContext {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            catalog: Catalog::default(),
            state: LoadState::Idle,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Loader stage.
    ///
    /// Shows the loading indicator, fetches the configured document and either keeps
    /// the catalog or shows the error indicator. There is no retry: once the state
    /// has left `Idle`, later calls return it unchanged without fetching.
    pub async fn load<S, G>(&mut self, source: &S, grid: &mut G) -> LoadState
    where
        S: CatalogSource,
        G: CardContainer,
    {
        if self.state != LoadState::Idle {
            tracing::warn!(state = ?self.state, "catalog already requested for this page");
            return self.state;
        }

        self.state = LoadState::Loading;
        grid.show_status(GridStatus::Loading);

        match load_catalog(source, &self.config.products_file).await {
            Ok(catalog) => {
                tracing::info!(count = catalog.len(), "products loaded");
                self.catalog = catalog;
                self.state = LoadState::Ready;
            }
            Err(error) => {
                tracing::error!(%error, path = %self.config.products_file, "Error loading products");
                grid.show_status(GridStatus::Unavailable);
                self.state = LoadState::Unavailable;
            }
        }
        self.state
    }

    /// The cards the current catalog renders to, in catalog order.
    pub fn cards(&self) -> Vec<ProductCard> {
        build_cards(&self.catalog, &self.config)
    }

    /// Renderer stage: replace the grid contents with one card per product.
    ///
    /// Only runs once the catalog is ready. An empty catalog leaves an empty grid.
    pub fn render<G>(&self, grid: &mut G) -> Vec<G::Handle>
    where
        G: CardContainer,
    {
        if self.state != LoadState::Ready {
            return Vec::new();
        }

        grid.clear();
        let mut handles = Vec::with_capacity(self.catalog.len());
        for card in self.cards() {
            match grid.append_card(&card) {
                Some(handle) => handles.push(handle),
                None => tracing::warn!(index = card.index, "product card could not be created"),
            }
        }
        handles
    }

    /// Animator stage: hand rendered elements to the reveal observer.
    pub fn animate<O, I>(&self, observer: &mut O, targets: I)
    where
        O: RevealObserver,
        I: IntoIterator<Item = O::Target>,
    {
        for target in targets {
            observer.observe(target);
        }
    }

    /// Run the whole pipeline once: load, then render and animate on success.
    pub async fn run<S, G, O>(&mut self, source: &S, grid: &mut G, observer: &mut O) -> LoadState
    where
        S: CatalogSource,
        G: CardContainer,
        O: RevealObserver<Target = G::Handle>,
    {
        if self.load(source, grid).await == LoadState::Ready {
            let handles = self.render(grid);
            self.animate(observer, handles);
        }
        self.state
    }
}
