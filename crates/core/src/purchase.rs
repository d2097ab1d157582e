//! Purchase affordances and Payhip product identifiers.

use std::sync::OnceLock;

use regex::Regex;

use crate::card::escape_html;
use crate::product::Product;

/// Identifier of a product on the hosted checkout widget.
///
/// Whatever the pattern captured is passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayhipId(String);

impl PayhipId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PayhipId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

fn payhip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"payhip\.com/b/([a-zA-Z0-9]+)").expect("payhip pattern"))
}

/// Extract the widget identifier from a link like `https://payhip.com/b/abc123`.
///
/// The match is unanchored: the first `payhip.com/b/<alnum>` occurrence wins.
pub fn extract_payhip_id(url: &str) -> Option<PayhipId> {
    payhip_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| PayhipId(m.as_str().to_string()))
}

/// The control a card offers for starting a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseAffordance {
    /// No link yet: a disabled "Coming Soon" button.
    ComingSoon,
    /// Link recognised by the checkout widget, which binds to it by identifier.
    Widget { link: String, product: PayhipId },
    /// Any other link: plain navigation in a new browsing context.
    External { link: String },
}

impl PurchaseAffordance {
    pub fn for_product(product: &Product) -> Self {
        match product.purchase_link.as_deref() {
            None => Self::ComingSoon,
            Some(link) => match extract_payhip_id(link) {
                Some(product) => Self::Widget { link: link.to_string(), product },
                None => Self::External { link: link.to_string() },
            },
        }
    }

    /// Navigable target, if any.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::ComingSoon => None,
            Self::Widget { link, .. } | Self::External { link } => Some(link.as_str()),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::ComingSoon => {
                r#"<button class="product-button" disabled>Coming Soon</button>"#.to_string()
            }
            Self::Widget { link, product } => format!(
                r#"<a href="{}" class="payhip-buy-button product-button" data-theme="none" data-product="{}"><i class="fas fa-shopping-cart"></i> Buy Now</a>"#,
                escape_html(link),
                escape_html(product.as_str()),
            ),
            Self::External { link } => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="product-button"><i class="fas fa-external-link-alt"></i> Buy Now</a>"#,
                escape_html(link),
            ),
        }
    }
}
