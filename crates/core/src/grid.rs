//! The product grid: the container the renderer replaces the contents of.

use crate::card::ProductCard;

/// Placeholder states the grid can show instead of cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridStatus {
    /// Catalog request in flight.
    Loading,
    /// Catalog could not be obtained. Terminal for the page view.
    Unavailable,
}

impl GridStatus {
    pub fn message(&self) -> &'static str {
        match self {
            GridStatus::Loading => "Loading products...",
            GridStatus::Unavailable => "Failed to load products. Please try again later.",
        }
    }

    pub fn to_html(&self) -> String {
        let icon = match self {
            GridStatus::Loading => r#"<i class="fas fa-spinner fa-spin"></i>"#,
            GridStatus::Unavailable => {
                r#"<i class="fas fa-exclamation-triangle" style="color: #f5576c;"></i>"#
            }
        };
        format!(
            r#"<div class="loading-spinner">{icon}<span>{}</span></div>"#,
            self.message()
        )
    }
}

/// Anything the pipeline can render the catalog into.
///
/// `show_status` and `clear` replace the whole contents; `append_card` adds one card
/// after the existing ones and hands back something the reveal observer can watch.
pub trait CardContainer {
    type Handle;

    fn show_status(&mut self, status: GridStatus);

    fn clear(&mut self);

    /// Returns `None` if the card could not be materialised; the batch continues.
    fn append_card(&mut self, card: &ProductCard) -> Option<Self::Handle>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlacedCard {
    card: ProductCard,
    revealed: bool,
}

/// In-memory grid that renders to a static HTML fragment.
///
/// Handles are card indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticGrid {
    status: Option<GridStatus>,
    cards: Vec<PlacedCard>,
}

impl StaticGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<GridStatus> {
        self.status
    }

    pub fn cards(&self) -> impl Iterator<Item = &ProductCard> {
        self.cards.iter().map(|placed| &placed.card)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|placed| placed.revealed)
    }

    /// Apply the revealed state to a card. Returns `false` for unknown indices.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(placed) => {
                placed.revealed = true;
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        if let Some(status) = self.status {
            return status.to_html();
        }
        self.cards
            .iter()
            .map(|placed| placed.card.to_html(placed.revealed))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CardContainer for StaticGrid {
    type Handle = usize;

    fn show_status(&mut self, status: GridStatus) {
        self.cards.clear();
        self.status = Some(status);
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.status = None;
    }

    fn append_card(&mut self, card: &ProductCard) -> Option<usize> {
        self.status = None;
        self.cards.push(PlacedCard {
            card: card.clone(),
            revealed: false,
        });
        Some(self.cards.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::product::Product;

    fn card(name: &str, index: usize) -> ProductCard {
        let product = Product {
            name: name.to_string(),
            ..Product::default()
        };
        ProductCard::new(&product, index, &StoreConfig::default())
    }

    #[test]
    fn status_replaces_cards() {
        let mut grid = StaticGrid::new();
        grid.append_card(&card("a", 0));
        grid.show_status(GridStatus::Unavailable);

        assert_eq!(grid.card_count(), 0);
        assert_eq!(grid.status(), Some(GridStatus::Unavailable));
        assert!(grid.to_html().contains("Failed to load products. Please try again later."));
    }

    #[test]
    fn cards_render_in_append_order() {
        let mut grid = StaticGrid::new();
        grid.show_status(GridStatus::Loading);
        grid.clear();
        assert_eq!(grid.append_card(&card("first", 0)), Some(0));
        assert_eq!(grid.append_card(&card("second", 1)), Some(1));

        let html = grid.to_html();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert!(!html.contains("loading-spinner"));
    }

    #[test]
    fn mark_revealed_only_touches_known_cards() {
        let mut grid = StaticGrid::new();
        grid.append_card(&card("a", 0));
        assert!(grid.mark_revealed(0));
        assert!(!grid.mark_revealed(5));
        assert!(grid.is_revealed(0));
        assert!(grid.to_html().contains("product-card fade-in"));
    }
}
