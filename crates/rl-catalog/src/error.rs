//! Error types for catalog operations.

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while indexing or querying a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error while walking the catalog root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A regex-mode query value failed to compile.
    #[error("invalid pattern for query key '{key}': {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}
