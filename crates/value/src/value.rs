//! [`Value`] - the dynamically-typed value domain.

use crate::{classify, Array, Date, Function, Kind, Object, RegExp, Shape};

/// Any value of the runtime.
///
/// Primitives are stored inline. Structured values are handles, so
/// `value.clone()` aliases the same allocation.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Function(Function),
    Date(Date),
    RegExp(RegExp),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Borrowed view used to switch on a value's classification.
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => Shape::Primitive(self),
            Value::Function(f) => Shape::Function(f),
            Value::Date(d) => Shape::Date(d),
            Value::RegExp(r) => Shape::RegExp(r),
            Value::Array(a) => Shape::Array(a),
            Value::Object(o) => Shape::PlainObject(o),
        }
    }

    pub fn kind(&self) -> Kind {
        classify(self)
    }

    pub fn is_primitive(&self) -> bool {
        self.kind() == Kind::Primitive
    }

    /// Whether both values are handles to the same allocation.
    pub fn same_ref(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Date(a), Value::Date(b)) => a.ptr_eq(b),
            (Value::RegExp(a), Value::RegExp(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Strict equality: primitives by value (`NaN` is unequal to itself,
    /// `0 === -0`), structured values by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => self.same_ref(other),
        }
    }

    /// True only for `NaN`, the one value not strictly equal to itself.
    pub fn is_self_unequal(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Allocation address of a structured value, `None` for primitives.
    pub fn id(&self) -> Option<usize> {
        match self {
            Value::Function(f) => Some(f.id()),
            Value::Date(d) => Some(d.id()),
            Value::RegExp(r) => Some(r.id()),
            Value::Array(a) => Some(a.id()),
            Value::Object(o) => Some(o.id()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_regexp(&self) -> Option<&RegExp> {
        match self {
            Value::RegExp(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Array::from_vec(items))
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<RegExp> for Value {
    fn from(r: RegExp) -> Self {
        Value::RegExp(r)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_equals_primitives() {
        assert!(Value::Undefined.strict_equals(&Value::Undefined));
        assert!(Value::Null.strict_equals(&Value::Null));
        assert!(!Value::Null.strict_equals(&Value::Undefined));
        assert!(Value::from(0.0).strict_equals(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).strict_equals(&Value::from(f64::NAN)));
        assert!(!Value::from(1).strict_equals(&Value::from("1")));
        assert!(Value::from("a").strict_equals(&Value::from("a")));
    }

    #[test]
    fn strict_equals_handles_by_identity() {
        let a = Value::from(Array::new());
        assert!(a.strict_equals(&a.clone()));
        assert!(!a.strict_equals(&Value::from(Array::new())));
        assert!(a.same_ref(&a.clone()));
        assert!(!Value::from(1).same_ref(&Value::from(1)));
    }

    #[test]
    fn self_unequal_is_nan_only() {
        assert!(Value::from(f64::NAN).is_self_unequal());
        assert!(!Value::from(f64::INFINITY).is_self_unequal());
        assert!(!Value::Undefined.is_self_unequal());
    }

    #[test]
    fn id_only_for_handles() {
        assert!(Value::from(1).id().is_none());
        let o = Object::new();
        assert_eq!(Value::from(o.clone()).id(), Some(o.id()));
    }
}
