//! yum-equal - deep structural equality for yum values.
//!
//! Provides [`is_equal`] for recursively comparing two [`Value`]s by
//! classification, and [`is_equal_with`] which additionally tolerates
//! cyclic graphs and enforces a nesting limit.
//!
//! [`Value`]: yum_value::Value

mod deep_equal;

pub use deep_equal::{is_equal, is_equal_with};
