//! Error types used throughout the crate.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A branch name still contains a `/` separator after cleaning.
    /// Branch names must be single path segments; nesting is expressed
    /// through paths, never through the name itself.
    #[error("branch name must not contain a / separator: \"{0}\"")]
    InvalidName(String),
}
