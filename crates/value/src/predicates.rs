//! Type predicates over [`Value`].

use crate::{classify, Kind, Value};

/// A number that is not `NaN`.
pub fn is_number(v: &Value) -> bool {
    matches!(v, Value::Number(n) if !n.is_nan())
}

pub fn is_boolean(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

pub fn is_string(v: &Value) -> bool {
    matches!(v, Value::String(_))
}

pub fn is_function(v: &Value) -> bool {
    classify(v) == Kind::Function
}

pub fn is_date(v: &Value) -> bool {
    classify(v) == Kind::Date
}

pub fn is_regexp(v: &Value) -> bool {
    classify(v) == Kind::RegExp
}

pub fn is_array(v: &Value) -> bool {
    classify(v) == Kind::Array
}

/// A plain object; arrays, dates, regexps and functions are not.
pub fn is_object(v: &Value) -> bool {
    classify(v) == Kind::PlainObject
}

pub fn is_null(v: &Value) -> bool {
    matches!(v, Value::Null)
}

pub fn is_undefined(v: &Value) -> bool {
    matches!(v, Value::Undefined)
}

pub fn is_defined(v: &Value) -> bool {
    !is_undefined(v)
}
