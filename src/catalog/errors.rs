//! Catalog error types

use thiserror::Error;

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Query number is not one of the supported ids
    #[error("Unexpected query: {0}")]
    InvalidQuery(i64),
}
