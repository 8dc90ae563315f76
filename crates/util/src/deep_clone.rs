//! Deep cloning of values.

use std::collections::HashMap;

use tracing::{debug, trace};
use yum_value::{Array, Date, Limits, Object, Shape, Value, ValueError};

/// Creates a deep copy of a value.
///
/// Primitives and functions come back as they are. Dates and regular
/// expressions are copied into new allocations. Arrays are rebuilt element
/// by element and plain objects key by key in insertion order, keeping the
/// source's prototype.
///
/// There is no cycle detection: a self-referential value overflows the
/// stack. Use [`clone_with`] for such input.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use yum_util::clone;
/// use yum_value::Value;
///
/// let original = Value::from(json!({"a": [1, {"b": 2}]}));
/// let copy = clone(&original);
/// assert!(!copy.same_ref(&original));
/// assert_eq!(copy.to_json(), original.to_json());
/// ```
pub fn clone(value: &Value) -> Value {
    match value.shape() {
        Shape::Primitive(v) => v.clone(),
        Shape::Function(f) => Value::Function(f.clone()),
        Shape::Date(d) => Value::Date(Date::new(d.time())),
        Shape::RegExp(r) => Value::RegExp(r.duplicate()),
        Shape::Array(a) => {
            let items = a.items();
            let copy = Array::with_capacity(items.len());
            for item in items.iter() {
                copy.push(clone(item));
            }
            Value::Array(copy)
        }
        Shape::PlainObject(o) => {
            let copy = Object::with_proto(o.proto());
            for (key, v) in o.props().iter() {
                copy.set(key.clone(), clone(v));
            }
            Value::Object(copy)
        }
    }
}

/// Like [`clone`], but safe on cyclic graphs and bounded in depth.
///
/// Every structured value in the source is copied once: shared
/// substructure stays shared in the copy and cycles are reproduced.
/// Nesting deeper than `limits.max_depth` fails with
/// [`ValueError::DepthLimitExceeded`].
///
/// ```
/// use yum_util::clone_with;
/// use yum_value::{Limits, Object, Value};
///
/// let node = Object::new();
/// node.set("next", Value::from(node.clone()));
///
/// let copy = clone_with(&node.clone().into(), &Limits::default()).unwrap();
/// let copy = copy.as_object().unwrap();
/// assert!(!copy.ptr_eq(&node));
/// assert!(copy.get_own("next").unwrap().as_object().unwrap().ptr_eq(copy));
/// # node.remove("next");
/// # copy.remove("next");
/// ```
pub fn clone_with(value: &Value, limits: &Limits) -> Result<Value, ValueError> {
    let mut cloner = Cloner {
        limits,
        seen: HashMap::new(),
    };
    cloner.copy(value, 0)
}

struct Cloner<'l> {
    limits: &'l Limits,
    /// Source allocation address to its copy.
    seen: HashMap<usize, Value>,
}

impl Cloner<'_> {
    fn copy(&mut self, value: &Value, depth: usize) -> Result<Value, ValueError> {
        if let Some(id) = value.id() {
            if let Some(copy) = self.seen.get(&id) {
                trace!(id, "clone reused copy of shared value");
                return Ok(copy.clone());
            }
        }

        let copy = match value.shape() {
            Shape::Primitive(v) => return Ok(v.clone()),
            Shape::Function(f) => return Ok(Value::Function(f.clone())),
            Shape::Date(d) => Value::Date(Date::new(d.time())),
            Shape::RegExp(r) => Value::RegExp(r.duplicate()),
            Shape::Array(a) => {
                let level = self.enter(depth)?;
                let items = a.items();
                let copy = Array::with_capacity(items.len());
                // Registered before the children so cycles resolve to it.
                self.seen.insert(a.id(), Value::Array(copy.clone()));
                for item in items.iter() {
                    copy.push(self.copy(item, level)?);
                }
                return Ok(Value::Array(copy));
            }
            Shape::PlainObject(o) => {
                let level = self.enter(depth)?;
                let copy = Object::with_proto(o.proto());
                self.seen.insert(o.id(), Value::Object(copy.clone()));
                for (key, v) in o.props().iter() {
                    copy.set(key.clone(), self.copy(v, level)?);
                }
                return Ok(Value::Object(copy));
            }
        };
        if let Some(id) = value.id() {
            self.seen.insert(id, copy.clone());
        }
        Ok(copy)
    }

    fn enter(&self, depth: usize) -> Result<usize, ValueError> {
        let level = depth + 1;
        if level > self.limits.max_depth {
            debug!(limit = self.limits.max_depth, "clone depth limit exceeded");
            return Err(ValueError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        Ok(level)
    }
}
