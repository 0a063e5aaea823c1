//! Error types for the currency catalog.

use thiserror::Error;

/// Errors raised when resolving currencies from user input.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The code does not name a currency in the catalog.
    #[error("Unknown currency code: {0}")]
    UnknownCode(String),
}

/// Result type alias for catalog lookups.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
