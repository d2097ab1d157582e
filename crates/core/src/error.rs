//! Catalog error model.

use thiserror::Error;

/// Result type used by the catalog loader.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why the catalog could not be obtained.
///
/// Callers of the pipeline never branch on the variant: every error collapses into
/// [`LoadState::Unavailable`](crate::LoadState::Unavailable). The variants exist so
/// the failure can be logged with its cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a response (network failure, fetch rejection).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body was not a catalog document.
    #[error("malformed catalog document: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
