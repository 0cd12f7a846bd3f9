//! Crate-level error types.
//!
//! [`PosError`] unifies every error source (configuration, catalog loading,
//! terminal I/O, JSON, rejected order input) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

use crate::order::OrderError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PosError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PosError {
    /// An environment variable held a value we could not interpret.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A menu catalog was readable but not well-formed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The order store declined an action.
    #[error("order rejected: {0}")]
    Order(#[from] OrderError),
}
