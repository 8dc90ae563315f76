//! Value classification.

use std::fmt;

use crate::{Array, Date, Function, Object, RegExp, Value};

/// The category a value belongs to. Every value has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Primitive,
    Array,
    PlainObject,
    Date,
    RegExp,
    Function,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Primitive => "primitive",
            Kind::Array => "array",
            Kind::PlainObject => "object",
            Kind::Date => "date",
            Kind::RegExp => "regexp",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value viewed through its [`Kind`], with the payload borrowed.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Primitive(&'a Value),
    Array(&'a Array),
    PlainObject(&'a Object),
    Date(&'a Date),
    RegExp(&'a RegExp),
    Function(&'a Function),
}

impl Shape<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Primitive(_) => Kind::Primitive,
            Shape::Array(_) => Kind::Array,
            Shape::PlainObject(_) => Kind::PlainObject,
            Shape::Date(_) => Kind::Date,
            Shape::RegExp(_) => Kind::RegExp,
            Shape::Function(_) => Kind::Function,
        }
    }
}

/// Returns the classification tag of `value`.
///
/// `Null` and `Undefined` are primitives, like numbers, strings and
/// booleans.
pub fn classify(value: &Value) -> Kind {
    value.shape().kind()
}
