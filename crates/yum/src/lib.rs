//! yum - value utilities: classification, deep equality, deep clone and
//! shallow assign over a dynamic [`Value`] domain.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`yum_value`] - the value model, [`classify`] and [`predicates`]
//! - [`yum_equal`] - [`is_equal`]
//! - [`yum_util`] - [`clone`], [`assign`], [`number`] and [`math`]
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use yum::{assign, classify, clone, is_equal, Kind, Value};
//!
//! let v = Value::from(json!({"a": [1, {"b": 2}]}));
//! assert_eq!(classify(&v), Kind::PlainObject);
//!
//! let copy = clone(&v);
//! assert!(is_equal(&v, &copy));
//!
//! let extra = Value::from(json!({"c": 3}));
//! assign(copy.as_object().unwrap(), extra.as_object().unwrap());
//! assert!(!is_equal(&v, &copy));
//! ```

pub use yum_equal::{is_equal, is_equal_with};
pub use yum_util::{
    assign, assign_all, clone, clone_with, gcd, gcd_all, lcm, lcm_all, math, number,
};
pub use yum_value::{
    classify, predicates, Array, Date, Function, Kind, Limits, NativeFn, Object, Props, RegExp,
    Shape, Value, ValueError,
};
