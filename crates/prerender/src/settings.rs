//! Environment-driven settings for the prerender binary.

use std::path::PathBuf;

use storefront_core::StoreConfig;
use thiserror::Error;

use crate::source::Source;

pub const ENV_PRODUCTS: &str = "STOREFRONT_PRODUCTS";
pub const ENV_BASE_URL: &str = "STOREFRONT_BASE_URL";
pub const ENV_CONFIG: &str = "STOREFRONT_CONFIG";
pub const ENV_ANIMATION_DELAY_MS: &str = "STOREFRONT_ANIMATION_DELAY_MS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("failed to read config override {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config override: {0}")]
    ConfigParse(String),
}

/// Where to load from and how to render.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: StoreConfig,
    /// Serve relative catalog paths from this origin instead of the file system.
    pub base_url: Option<String>,
}

impl Settings {
    /// Build settings from an explicit variable lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => {
                let path = PathBuf::from(path);
                let doc = std::fs::read_to_string(&path)
                    .map_err(|source| SettingsError::ConfigRead { path, source })?;
                StoreConfig::from_json(&doc).map_err(|e| SettingsError::ConfigParse(e.to_string()))?
            }
            None => StoreConfig::default(),
        };

        if let Some(products) = lookup(ENV_PRODUCTS) {
            config.products_file = products;
        }
        if let Some(value) = lookup(ENV_ANIMATION_DELAY_MS) {
            config.animation_delay_ms = value.trim().parse().map_err(|_| SettingsError::InvalidNumber {
                var: ENV_ANIMATION_DELAY_MS,
                value,
            })?;
        }

        let base_url = lookup(ENV_BASE_URL).map(|url| url.trim_end_matches('/').to_string());
        Ok(Self { config, base_url })
    }

    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// HTTP when a base URL is configured or the products path is itself a URL,
    /// otherwise the file system relative to the working directory.
    pub fn source(&self) -> Source {
        let path = &self.config.products_file;
        if self.base_url.is_some() || path.starts_with("http://") || path.starts_with("https://") {
            Source::Http(crate::source::HttpSource::new(self.base_url.clone()))
        } else {
            Source::File(crate::source::FileSource::new("."))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.config, StoreConfig::default());
        assert!(settings.base_url.is_none());
        assert!(matches!(settings.source(), Source::File(_)));
    }

    #[test]
    fn environment_overrides_apply() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_PRODUCTS, "catalog/products.json"),
            (ENV_ANIMATION_DELAY_MS, "40"),
            (ENV_BASE_URL, "http://localhost:8000/"),
        ]))
        .unwrap();

        assert_eq!(settings.config.products_file, "catalog/products.json");
        assert_eq!(settings.config.animation_delay_ms, 40);
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:8000"));
        assert!(matches!(settings.source(), Source::Http(_)));
    }

    #[test]
    fn absolute_url_selects_http() {
        let settings =
            Settings::from_lookup(lookup(&[(ENV_PRODUCTS, "https://shop.example/products.json")]))
                .unwrap();
        assert!(matches!(settings.source(), Source::Http(_)));
    }

    #[test]
    fn bad_delay_is_rejected() {
        let err = Settings::from_lookup(lookup(&[(ENV_ANIMATION_DELAY_MS, "soon")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidNumber { .. }));
    }

    #[test]
    fn config_override_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, r#"{"animationDelayMs": 5, "scrollOffsetPx": 20}"#).unwrap();

        let settings = Settings::from_lookup(lookup(&[(ENV_CONFIG, path.to_str().unwrap())])).unwrap();
        assert_eq!(settings.config.animation_delay_ms, 5);
        assert_eq!(settings.config.scroll_offset_px, 20);
    }
}
