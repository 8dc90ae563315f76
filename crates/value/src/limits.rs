//! Limits for the cycle-aware operations.

use serde::{Deserialize, Serialize};

/// Options for the cycle-aware equality and clone operations.
///
/// `max_depth` bounds container nesting: a top-level array or object sits at
/// depth 1, its container children at depth 2, and so on.
///
/// ```
/// use yum_value::Limits;
///
/// let limits: Limits = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
/// assert_eq!(limits.max_depth, 8);
///
/// let defaults: Limits = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, Limits::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_depth: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
