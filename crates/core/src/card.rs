//! Product cards: the per-product view model and its markup.

use crate::config::StoreConfig;
use crate::product::Product;
use crate::purchase::PurchaseAffordance;

/// Built-in placeholder shown when a product image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgdmlld0JveD0iMCAwIDMwMCAyMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIzMDAiIGhlaWdodD0iMjAwIiBmaWxsPSIjMmEyYTJhIi8+CjxwYXRoIGQ9Ik0xNTAgMTAwQzE1MCA4Mi4zNiAxNjQuOTEgNjggMTgzIDY4QzIwMS4wOSA2OCAyMTYgODIuMzYgMjE2IDEwMEMyMTYgMTE3LjY0IDIwMS4wOSAxMzIgMTgzIDEzMkMxNjQuOTEgMTMyIDE1MCAxMTcuNjQgMTUwIDEwMFoiIGZpbGw9IiM1MDUwNTAiLz4KPHBhdGggZD0iTTEyNSAxMjVMMTc1IDc1TDIyNSAxMjVMMTc1IDE3NUwxMjUgMTI1WiIgZmlsbD0iIzUwNTA1MCIvPgo8L3N2Zz4K";

/// Accessible label used together with [`PLACEHOLDER_IMAGE`].
pub const PLACEHOLDER_IMAGE_ALT: &str = "Product image not available";

/// CSS class carried by every card.
pub const CARD_CLASS: &str = "product-card";

/// CSS class applied once an element has been revealed.
pub const REVEALED_CLASS: &str = "fade-in";

/// Escape text for HTML text and double-quoted attribute contexts.
///
/// Catalog text is treated as untrusted input.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Image of a card, with a one-shot fallback to the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    src: String,
    alt: String,
    fell_back: bool,
}

impl CardImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fell_back: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn has_fallen_back(&self) -> bool {
        self.fell_back
    }

    /// Swap in the placeholder after a load failure.
    ///
    /// Returns `false` (and changes nothing) if the placeholder is already in place,
    /// so a failing placeholder cannot loop.
    pub fn fall_back(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.src = PLACEHOLDER_IMAGE.to_string();
        self.alt = PLACEHOLDER_IMAGE_ALT.to_string();
        self.fell_back = true;
        true
    }
}

/// One rendered catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub index: usize,
    /// `index × animationDelayMs`; cosmetic only.
    pub delay_ms: u64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: CardImage,
    pub affordance: PurchaseAffordance,
}

impl ProductCard {
    pub fn new(product: &Product, index: usize, config: &StoreConfig) -> Self {
        Self {
            index,
            delay_ms: config.card_delay_ms(index),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            image: CardImage::new(product.image.clone(), product.name.clone()),
            affordance: PurchaseAffordance::for_product(product),
        }
    }

    /// Inline style carrying the stagger.
    pub fn style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }

    /// Markup placed inside the card element.
    pub fn inner_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="product-image"><img src="{src}" alt="{alt}" loading="lazy"></div>"#,
                r#"<div class="product-content">"#,
                r#"<h3 class="product-name">{name}</h3>"#,
                r#"<p class="product-description">{description}</p>"#,
                r#"<div class="product-price">{price}</div>"#,
                "{affordance}",
                "</div>",
            ),
            src = escape_html(self.image.src()),
            alt = escape_html(self.image.alt()),
            name = escape_html(&self.name),
            description = escape_html(&self.description),
            price = escape_html(&self.price),
            affordance = self.affordance.to_html(),
        )
    }

    /// Full card element, optionally already in the revealed state.
    pub fn to_html(&self, revealed: bool) -> String {
        let class = if revealed {
            format!("{CARD_CLASS} {REVEALED_CLASS}")
        } else {
            CARD_CLASS.to_string()
        };
        format!(
            r#"<div class="{class}" style="{style}">{inner}</div>"#,
            style = self.style(),
            inner = self.inner_html(),
        )
    }
}

/// Build the cards for a catalog, in catalog order.
pub fn build_cards<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    config: &StoreConfig,
) -> Vec<ProductCard> {
    products
        .into_iter()
        .enumerate()
        .map(|(index, product)| ProductCard::new(product, index, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;

    fn widget() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: "$9".to_string(),
            image: "w.png".to_string(),
            purchase_link: Some("https://payhip.com/b/abc123".to_string()),
        }
    }

    #[test]
    fn card_carries_product_text_and_stagger() {
        let card = ProductCard::new(&widget(), 4, &StoreConfig::default());
        assert_eq!(card.delay_ms, 400);
        assert_eq!(card.style(), "transition-delay: 400ms");

        let html = card.inner_html();
        assert!(html.contains(r#"<img src="w.png" alt="Widget" loading="lazy">"#));
        assert!(html.contains(r#"<h3 class="product-name">Widget</h3>"#));
        assert!(html.contains(r#"<p class="product-description">A widget</p>"#));
        assert!(html.contains(r#"<div class="product-price">$9</div>"#));
        assert!(html.contains(r#"data-product="abc123""#));
    }

    #[test]
    fn markup_in_catalog_text_is_escaped() {
        let product = Product {
            name: r#"<script>alert("x")</script>"#.to_string(),
            description: "Fish & Chips".to_string(),
            ..Product::default()
        };
        let html = ProductCard::new(&product, 0, &StoreConfig::default()).inner_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(html.contains("Fish &amp; Chips"));
    }

    #[test]
    fn image_falls_back_exactly_once() {
        let mut card = ProductCard::new(&widget(), 0, &StoreConfig::default());
        assert!(card.image.fall_back());
        assert_eq!(card.image.src(), PLACEHOLDER_IMAGE);
        assert_eq!(card.image.alt(), PLACEHOLDER_IMAGE_ALT);

        assert!(!card.image.fall_back());
        assert!(card.image.has_fallen_back());
        assert_eq!(card.image.src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn revealed_card_gets_fade_in_class() {
        let card = ProductCard::new(&widget(), 0, &StoreConfig::default());
        assert!(card.to_html(true).starts_with(r#"<div class="product-card fade-in" style="transition-delay: 0ms">"#));
        assert!(card.to_html(false).starts_with(r#"<div class="product-card" style="#));
    }

    #[test]
    fn missing_fields_render_empty() {
        let card = ProductCard::new(&Product::default(), 0, &StoreConfig::default());
        let html = card.inner_html();
        assert!(html.contains(r#"<h3 class="product-name"></h3>"#));
        assert!(html.contains("Coming Soon"));
    }
}
