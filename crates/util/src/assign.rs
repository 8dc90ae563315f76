//! Shallow merge of own properties.

use yum_value::Object;

/// Copies every own property of `source` onto `target`, overwriting keys
/// that already exist, and returns `target`.
///
/// Values are copied by handle; nothing is cloned.
///
/// ```
/// use yum_util::assign;
/// use yum_value::{Object, Value};
///
/// let target = Object::from_iter([("a", Value::from(1))]);
/// let source = Object::from_iter([("b", Value::from(2))]);
/// let result = assign(&target, &source);
/// assert!(result.ptr_eq(&target));
/// assert_eq!(target.keys(), vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn assign(target: &Object, source: &Object) -> Object {
    // Snapshot first: `source` may be `target`.
    for (key, value) in source.entries() {
        target.set(key, value);
    }
    target.clone()
}

/// Applies [`assign`] for each source, left to right.
pub fn assign_all<'a, I>(target: &Object, sources: I) -> Object
where
    I: IntoIterator<Item = &'a Object>,
{
    for source in sources {
        assign(target, source);
    }
    target.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yum_value::Value;

    #[test]
    fn overwrites_and_keeps_order() {
        let target = Object::from_iter([("a", Value::from(1)), ("b", Value::from(2))]);
        let source = Object::from_iter([("b", Value::from(3)), ("c", Value::from(4))]);
        assign(&target, &source);
        assert_eq!(
            target.keys(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(target.get_own("b").and_then(|v| v.as_number()), Some(3.0));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn values_are_shared_not_cloned() {
        let inner = Object::new();
        let source = Object::from_iter([("inner", Value::from(inner.clone()))]);
        let target = assign(&Object::new(), &source);
        let copied = target.get_own("inner").unwrap();
        assert!(copied.same_ref(&Value::from(inner)));
    }

    #[test]
    fn self_assign_is_a_no_op() {
        let o = Object::from_iter([("a", Value::from(1))]);
        assign(&o, &o);
        assert_eq!(o.len(), 1);
    }

    #[test]
    fn inherited_properties_are_not_copied() {
        let proto = Object::from_iter([("inherited", Value::from(1))]);
        let source = Object::with_proto(Some(proto));
        source.set("own", Value::from(2));
        let target = assign(&Object::new(), &source);
        assert_eq!(target.keys(), vec!["own".to_string()]);
    }

    #[test]
    fn later_sources_win() {
        let a = Object::from_iter([("k", Value::from("a"))]);
        let b = Object::from_iter([("k", Value::from("b"))]);
        let target = assign_all(&Object::new(), [&a, &b]);
        assert_eq!(target.get_own("k").unwrap().as_str(), Some("b"));
    }
}
