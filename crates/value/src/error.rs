//! Error type shared by the yum crates.

use thiserror::Error;

/// Error type for value construction and the guarded operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid regular expression flags: {0:?}")]
    InvalidRegExpFlags(String),
    #[error("invalid regular expression pattern: {0}")]
    InvalidRegExpPattern(String),
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },
    #[error("integer overflow")]
    Overflow,
}
