//! Error types for the drop-table engine.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while evaluating drop tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// A drop row or roll referenced a branch path that does not exist.
    /// Rolling never creates branches, so a typo in a table surfaces here
    /// instead of silently growing the catalog.
    #[error("no branch at path: \"{0}\"")]
    BranchNotFound(String),
}
