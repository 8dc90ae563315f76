use std::collections::HashSet;
use std::convert::Infallible;

use tracing::{debug, trace};
use yum_value::{Array, Limits, Object, Shape, Value, ValueError};

/// Performs a deep equality check between two values.
///
/// Strictly equal values are equal, and so are two `NaN`s. Otherwise both
/// values must share a classification:
///
/// - functions compare by source text
/// - dates by time value (two invalid dates are equal)
/// - regular expressions by `/source/flags`
/// - arrays index by index
/// - plain objects by own key set and per-key values, in any key order
///
/// Primitives that are not strictly equal are never equal, so `1` and
/// `"1"` differ.
///
/// Recursion follows the input; a cyclic value that is not shared by
/// reference between `a` and `b` overflows the stack. Use
/// [`is_equal_with`] for such input.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use yum_equal::is_equal;
/// use yum_value::Value;
///
/// let a = Value::from(json!({"a": [1, {"b": 2}]}));
/// let b = Value::from(json!({"a": [1, {"b": 2}]}));
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&Value::from(json!([])), &Value::from(json!({}))));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if a.strict_equals(b) {
        return true;
    }
    if a.is_self_unequal() && b.is_self_unequal() {
        return true;
    }

    match (a.shape(), b.shape()) {
        (Shape::Function(x), Shape::Function(y)) => x.source() == y.source(),
        (Shape::Date(x), Shape::Date(y)) => same_time(x.time(), y.time()),
        (Shape::RegExp(x), Shape::RegExp(y)) => x.to_string() == y.to_string(),
        (Shape::Array(x), Shape::Array(y)) => {
            arrays_equal(x, y, |a, b| Ok::<_, Infallible>(is_equal(a, b)))
                .unwrap_or_else(|never| match never {})
        }
        (Shape::PlainObject(x), Shape::PlainObject(y)) => {
            objects_equal(x, y, |a, b| Ok::<_, Infallible>(is_equal(a, b)))
                .unwrap_or_else(|never| match never {})
        }
        // Different classifications, or primitives that failed the strict check.
        _ => false,
    }
}

/// Like [`is_equal`], but safe on cyclic graphs and bounded in depth.
///
/// A pair of containers that is re-entered while it is still being compared
/// is assumed equal, so two structurally identical cycles compare equal.
/// Nesting deeper than `limits.max_depth` fails with
/// [`ValueError::DepthLimitExceeded`].
///
/// ```
/// use yum_equal::is_equal_with;
/// use yum_value::{Array, Limits, Value};
///
/// let a = Array::new();
/// a.push(Value::from(a.clone()));
/// let b = Array::new();
/// b.push(Value::from(b.clone()));
///
/// let equal = is_equal_with(&a.clone().into(), &b.clone().into(), &Limits::default());
/// assert_eq!(equal, Ok(true));
/// # a.items_mut().clear();
/// # b.items_mut().clear();
/// ```
pub fn is_equal_with(a: &Value, b: &Value, limits: &Limits) -> Result<bool, ValueError> {
    let mut guard = Guard {
        limits,
        active: HashSet::new(),
    };
    guard.eq(a, b, 0)
}

struct Guard<'l> {
    limits: &'l Limits,
    /// Container pairs on the current comparison path.
    active: HashSet<(usize, usize)>,
}

impl Guard<'_> {
    fn eq(&mut self, a: &Value, b: &Value, depth: usize) -> Result<bool, ValueError> {
        if a.strict_equals(b) {
            return Ok(true);
        }
        if a.is_self_unequal() && b.is_self_unequal() {
            return Ok(true);
        }

        match (a.shape(), b.shape()) {
            (Shape::Function(x), Shape::Function(y)) => Ok(x.source() == y.source()),
            (Shape::Date(x), Shape::Date(y)) => Ok(same_time(x.time(), y.time())),
            (Shape::RegExp(x), Shape::RegExp(y)) => Ok(x.to_string() == y.to_string()),
            (Shape::Array(x), Shape::Array(y)) => {
                let Some(level) = self.enter((x.id(), y.id()), depth)? else {
                    return Ok(true);
                };
                let result = arrays_equal(x, y, |a, b| self.eq(a, b, level));
                self.active.remove(&(x.id(), y.id()));
                result
            }
            (Shape::PlainObject(x), Shape::PlainObject(y)) => {
                let Some(level) = self.enter((x.id(), y.id()), depth)? else {
                    return Ok(true);
                };
                let result = objects_equal(x, y, |a, b| self.eq(a, b, level));
                self.active.remove(&(x.id(), y.id()));
                result
            }
            _ => Ok(false),
        }
    }

    /// Marks a container pair as active. Returns the nesting level of its
    /// children, or `None` when the pair is already on the path.
    fn enter(&mut self, pair: (usize, usize), depth: usize) -> Result<Option<usize>, ValueError> {
        let level = depth + 1;
        if level > self.limits.max_depth {
            debug!(limit = self.limits.max_depth, "equality depth limit exceeded");
            return Err(ValueError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        if !self.active.insert(pair) {
            trace!(left = pair.0, right = pair.1, "equality re-entered container pair");
            return Ok(None);
        }
        Ok(Some(level))
    }
}

fn same_time(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn arrays_equal<E, F>(a: &Array, b: &Array, mut eq: F) -> Result<bool, E>
where
    F: FnMut(&Value, &Value) -> Result<bool, E>,
{
    let (a, b) = (a.items(), b.items());
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b.iter()) {
        if !eq(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn objects_equal<E, F>(a: &Object, b: &Object, mut eq: F) -> Result<bool, E>
where
    F: FnMut(&Value, &Value) -> Result<bool, E>,
{
    let (a, b) = (a.props(), b.props());
    // Equal sizes plus every key of `a` in `b` means equal key sets.
    if a.len() != b.len() {
        return Ok(false);
    }
    for (key, x) in a.iter() {
        match b.get(key) {
            Some(y) => {
                if !eq(x, y)? {
                    return Ok(false);
                }
            }
            None => return Ok(false),
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yum_value::{Date, Function, RegExp};

    #[test]
    fn nan_equals_nan() {
        assert!(is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!is_equal(&Value::from(f64::NAN), &Value::from(0)));
    }

    #[test]
    fn functions_compare_by_source() {
        let a = Value::from(Function::new("function (x) { return x; }"));
        let b = Value::from(Function::native("function (x) { return x; }", |args| {
            args.first().cloned().unwrap_or_default()
        }));
        let c = Value::from(Function::new("function (y) { return y; }"));
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn dates_compare_by_time() {
        let a = Value::from(Date::new(1_000.0));
        assert!(is_equal(&a, &Value::from(Date::new(1_000.0))));
        assert!(!is_equal(&a, &Value::from(Date::new(1_001.0))));
        assert!(is_equal(
            &Value::from(Date::invalid()),
            &Value::from(Date::invalid())
        ));
        assert!(!is_equal(&a, &Value::from(1_000.0)));
    }

    #[test]
    fn regexps_compare_by_string_form() {
        let re = |s, f| Value::from(RegExp::new(s, f).unwrap());
        assert!(is_equal(&re("a+", "gi"), &re("a+", "ig")));
        assert!(!is_equal(&re("a+", "g"), &re("a+", "")));
        assert!(!is_equal(&re("a+", ""), &re("a*", "")));
    }

    #[test]
    fn guarded_matches_unguarded_on_acyclic_input() {
        let a = Value::from(serde_json::json!({"x": [1, {"y": null}], "z": "s"}));
        let b = Value::from(serde_json::json!({"z": "s", "x": [1, {"y": null}]}));
        let c = Value::from(serde_json::json!({"z": "s", "x": [1, {"y": 0}]}));
        let limits = Limits::default();
        assert_eq!(is_equal_with(&a, &b, &limits), Ok(true));
        assert_eq!(is_equal_with(&a, &c, &limits), Ok(false));
    }

    #[test]
    fn guarded_depth_limit() {
        let v = Value::from(serde_json::json!([[[1]]]));
        let w = Value::from(serde_json::json!([[[1]]]));
        assert_eq!(is_equal_with(&v, &w, &Limits::new(3)), Ok(true));
        assert_eq!(
            is_equal_with(&v, &w, &Limits::new(2)),
            Err(ValueError::DepthLimitExceeded { limit: 2 })
        );
        // identical handles never descend
        assert_eq!(is_equal_with(&v, &v, &Limits::new(0)), Ok(true));
    }

    #[test]
    fn guarded_cycles_with_different_payloads() {
        let a = Object::new();
        a.set("self", Value::from(a.clone()));
        a.set("n", Value::from(1));
        let b = Object::new();
        b.set("self", Value::from(b.clone()));
        b.set("n", Value::from(2));

        let limits = Limits::default();
        assert_eq!(
            is_equal_with(&a.clone().into(), &b.clone().into(), &limits),
            Ok(false)
        );

        a.remove("self");
        b.remove("self");
    }
}
