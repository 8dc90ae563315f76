//! yum-value - the dynamic value domain shared by the yum crates.
//!
//! A [`Value`] is either a primitive (copied by value) or a handle to a
//! shared allocation: [`Array`], [`Object`], [`Date`], [`RegExp`] and
//! [`Function`]. Cloning a handle with [`Clone`] copies the reference, not
//! the structure; structural copies live in `yum-util`.
//!
//! # Overview
//!
//! - [`classify`] - maps every value to exactly one [`Kind`]
//! - [`Value::shape`] - borrowed view of a value, switched on by the
//!   equality and clone algorithms
//! - [`predicates`] - `is_number`, `is_date`, `is_object`, ...
//! - [`Limits`] - depth limits for the cycle-aware operations
//!
//! # Example
//!
//! ```
//! use yum_value::{classify, Kind, Value};
//! use serde_json::json;
//!
//! let v = Value::from(json!({"a": [1, {"b": 2}]}));
//! assert_eq!(classify(&v), Kind::PlainObject);
//! assert_eq!(classify(&Value::Null), Kind::Primitive);
//! ```

mod array;
mod date;
mod error;
mod function;
mod json;
mod kind;
mod limits;
mod object;
pub mod predicates;
mod regexp;
mod value;

pub use array::Array;
pub use date::Date;
pub use error::ValueError;
pub use function::{Function, NativeFn};
pub use kind::{classify, Kind, Shape};
pub use limits::Limits;
pub use object::{Object, Props};
pub use regexp::RegExp;
pub use value::Value;
