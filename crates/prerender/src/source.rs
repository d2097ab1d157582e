//! Native catalog sources.

use std::path::PathBuf;

use storefront_core::{CatalogError, CatalogResult, CatalogSource, RawResponse};

/// Fetches catalog documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url_for(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) if !path.starts_with("http://") && !path.starts_with("https://") => {
                format!("{}/{}", base, path.trim_start_matches('/'))
            }
            _ => path.to_string(),
        }
    }
}

impl CatalogSource for HttpSource {
    async fn fetch(&self, path: &str) -> CatalogResult<RawResponse> {
        let url = self.url_for(path);
        tracing::debug!(%url, "fetching catalog");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        Ok(RawResponse::new(status, body))
    }
}

/// Reads catalog documents from disk, answering like a static file server.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for FileSource {
    async fn fetch(&self, path: &str) -> CatalogResult<RawResponse> {
        let file = self.root.join(path);
        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(RawResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RawResponse::new(404, "")),
            Err(e) => Err(CatalogError::transport(format!("{}: {e}", file.display()))),
        }
    }
}

/// Source picked at startup.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl CatalogSource for Source {
    async fn fetch(&self, path: &str) -> CatalogResult<RawResponse> {
        match self {
            Source::Http(source) => source.fetch(path).await,
            Source::File(source) => source.fetch(path).await,
        }
    }
}
