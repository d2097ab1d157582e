//! Catalog loader: fetch the catalog document and decode it.

use crate::error::{CatalogError, CatalogResult};
use crate::product::Catalog;

/// A response as seen by the loader: status plus the full body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where catalog documents come from (browser `fetch`, HTTP client, file system).
///
/// Implementations report transport failures as [`CatalogError::Transport`]; status
/// handling and decoding are the loader's job. Futures need not be `Send` so the
/// browser implementation can hold JS values across awaits.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch(&self, path: &str) -> CatalogResult<RawResponse>;
}

/// Fetch `path` from `source` and decode it into a catalog.
///
/// Transport failures, non-success statuses and malformed bodies all surface as
/// errors; no partial catalog is ever returned.
pub async fn load_catalog<S>(source: &S, path: &str) -> CatalogResult<Catalog>
where
    S: CatalogSource,
{
    let response = source.fetch(path).await?;
    if !response.is_success() {
        return Err(CatalogError::Status(response.status));
    }
    let catalog = Catalog::from_json(&response.body)?;
    tracing::debug!(path, count = catalog.len(), "catalog decoded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(CatalogResult<RawResponse>);

    impl CatalogSource for Fixed {
        async fn fetch(&self, _path: &str) -> CatalogResult<RawResponse> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let source = Fixed(Ok(RawResponse::ok(r#"{"products":[{"name":"A"},{"name":"B"}]}"#)));
        let catalog = load_catalog(&source, "products.json").await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error_even_with_valid_body() {
        let source = Fixed(Ok(RawResponse::new(500, r#"{"products":[]}"#)));
        let err = load_catalog(&source, "products.json").await.unwrap_err();
        assert_eq!(err, CatalogError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let source = Fixed(Err(CatalogError::transport("connection refused")));
        let err = load_catalog(&source, "products.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let source = Fixed(Ok(RawResponse::ok("<html>not json</html>")));
        let err = load_catalog(&source, "products.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn success_range() {
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}
