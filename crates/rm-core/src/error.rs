//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid distance {0}: must be finite, non-negative, and at most 1e12 km")]
    InvalidDistance(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
