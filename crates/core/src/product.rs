//! Product records and the catalog document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

/// Opaque product identifier, kept as the text of whatever the document held.
///
/// Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as published in the catalog document. Read-only.
///
/// Every field is optional on the wire; missing text renders as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Pre-formatted display price; no currency math is done on it.
    pub price: String,
    pub image: String,
    /// External purchase page. `None` means not purchasable yet.
    pub purchase_link: Option<String>,
}

impl Product {
    /// Decode one catalog entry without ever failing.
    ///
    /// Strings and numbers are accepted for text fields. A non-object entry yields an
    /// all-empty product so one bad record never sinks the batch.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            tracing::warn!("catalog entry is not an object; rendering it empty");
            return Self::default();
        }
        match WireProduct::deserialize(value) {
            Ok(wire) => wire.into(),
            Err(error) => {
                tracing::warn!(%error, "catalog entry could not be decoded; rendering it empty");
                Self::default()
            }
        }
    }
}

/// Catalog entry as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireProduct {
    #[serde(deserialize_with = "lenient_text")]
    id: String,
    #[serde(deserialize_with = "lenient_text")]
    name: String,
    #[serde(deserialize_with = "lenient_text")]
    description: String,
    #[serde(deserialize_with = "lenient_text")]
    price: String,
    #[serde(deserialize_with = "lenient_text")]
    image: String,
    #[serde(rename = "payhipLink", deserialize_with = "lenient_link")]
    payhip_link: Option<String>,
    #[serde(rename = "purchaseLink", deserialize_with = "lenient_link")]
    purchase_link: Option<String>,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            id: ProductId(wire.id),
            name: wire.name,
            description: wire.description,
            price: wire.price,
            image: wire.image,
            purchase_link: wire.payhip_link.or(wire.purchase_link),
        }
    }
}

/// Text field that also accepts numbers and booleans. Anything else reads as empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Link field: only a non-empty string counts as a link.
fn lenient_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// JSON truthiness as a script would see it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Ordered product list driving the storefront grid.
///
/// Order is preserved from the document: the index decides DOM position and
/// animation stagger. No deduplication is performed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode a `{ "products": [...] }` document.
    ///
    /// A missing or falsy product list is an empty catalog, and so is a top-level
    /// value that is not an object (it has no `products` field). Unparseable JSON, a
    /// `null` document, or a `products` value that is set but not a list is malformed.
    pub fn from_json(body: &str) -> CatalogResult<Self> {
        let doc: Value =
            serde_json::from_str(body).map_err(|e| CatalogError::malformed(e.to_string()))?;

        let products = match &doc {
            Value::Null => return Err(CatalogError::malformed("document is null")),
            Value::Object(obj) => obj.get("products"),
            _ => None,
        };

        match products {
            None => Ok(Self::default()),
            Some(value) if !is_truthy(value) => Ok(Self::default()),
            Some(Value::Array(entries)) => {
                Ok(Self::new(entries.iter().map(Product::from_value).collect()))
            }
            Some(_) => Err(CatalogError::malformed("`products` is not a list")),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let catalog = Catalog::from_json(
            r#"{"products":[{"id":1,"name":"Widget","description":"A widget","price":"$9","image":"w.png","payhipLink":"https://payhip.com/b/abc123"}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        let product = &catalog.products()[0];
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, "$9");
        assert_eq!(product.image, "w.png");
        assert_eq!(product.purchase_link.as_deref(), Some("https://payhip.com/b/abc123"));
    }

    #[test]
    fn missing_or_null_products_is_empty() {
        assert!(Catalog::from_json("{}").unwrap().is_empty());
        assert!(Catalog::from_json(r#"{"products":null}"#).unwrap().is_empty());
        assert!(Catalog::from_json(r#"{"products":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn documents_without_a_product_list_are_empty() {
        for body in [
            "[]",
            "42",
            r#""str""#,
            "true",
            r#"{"products":false}"#,
            r#"{"products":0}"#,
            r#"{"products":""}"#,
        ] {
            let catalog = Catalog::from_json(body).unwrap();
            assert!(catalog.is_empty(), "body {body:?} gave {catalog:?}");
        }
    }

    #[test]
    fn non_catalog_documents_are_malformed() {
        for body in ["", "{", "null", r#"{"products":"lots"}"#, r#"{"products":{}}"#, r#"{"products":1}"#] {
            let err = Catalog::from_json(body).unwrap_err();
            assert!(matches!(err, CatalogError::Malformed(_)), "body {body:?} gave {err:?}");
        }
    }

    #[test]
    fn sparse_entries_render_empty_fields() {
        let catalog = Catalog::from_json(r#"{"products":[{"name":"Only name"}, 42, {"price": 12.5}]}"#)
            .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].name, "Only name");
        assert_eq!(catalog.products()[0].description, "");
        assert_eq!(catalog.products()[0].purchase_link, None);
        assert_eq!(catalog.products()[1], Product::default());
        assert_eq!(catalog.products()[2].price, "12.5");
    }

    #[test]
    fn empty_or_non_string_link_is_absent() {
        let catalog = Catalog::from_json(
            r#"{"products":[{"payhipLink":""},{"payhipLink":7},{"purchaseLink":"https://shop.example/x"}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.products()[0].purchase_link, None);
        assert_eq!(catalog.products()[1].purchase_link, None);
        assert_eq!(
            catalog.products()[2].purchase_link.as_deref(),
            Some("https://shop.example/x")
        );
    }

    #[test]
    fn empty_payhip_link_falls_through_to_alias() {
        let catalog = Catalog::from_json(
            r#"{"products":[
                {"payhipLink":"","purchaseLink":"https://payhip.com/b/abc"},
                {"payhipLink":null,"purchaseLink":"https://payhip.com/b/abc"},
                {"payhipLink":"https://payhip.com/b/first","purchaseLink":"https://payhip.com/b/second"}
            ]}"#,
        )
        .unwrap();

        let links: Vec<_> = catalog.iter().map(|p| p.purchase_link.as_deref()).collect();
        assert_eq!(
            links,
            [
                Some("https://payhip.com/b/abc"),
                Some("https://payhip.com/b/abc"),
                Some("https://payhip.com/b/first"),
            ]
        );
    }

    #[test]
    fn order_is_preserved() {
        let catalog = Catalog::from_json(
            r#"{"products":[{"id":"c"},{"id":"a"},{"id":"b"},{"id":"a"}]}"#,
        )
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["c", "a", "b", "a"]);
    }
}
