//! Error types for reportlet assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Errors that can occur while assembling a reportlet.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// No spec document supplied (null or empty object).
    #[error("reportlet spec must not be empty")]
    EmptySpec,

    /// Malformed spec document.
    #[error("invalid reportlet spec: {0}")]
    Spec(#[from] serde_json::Error),

    /// Catalog lookup error.
    #[error("catalog lookup failed: {0}")]
    Catalog(#[from] rl_catalog::CatalogError),

    /// IO error (file read, directory creation, or staging copy).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caption template references an entity absent on the matched entry.
    #[error("caption template references unknown entity '{placeholder}'")]
    Template { placeholder: String },

    /// Caption template has an unterminated or stray brace.
    #[error("caption template has an unbalanced brace at byte {offset}")]
    UnbalancedBrace { offset: usize },

    /// A source file lies under neither the output tree nor the catalog
    /// root's parent, so no embedding anchor can be derived.
    #[error("cannot anchor '{path}' relative to the output tree")]
    UnanchoredPath { path: PathBuf },
}
