//! Classification matrix: every value maps to exactly one kind, and the
//! type predicates agree with it.

use serde_json::json;
use yum_value::predicates::{
    is_array, is_boolean, is_date, is_function, is_number, is_object, is_regexp, is_string,
};
use yum_value::{classify, Date, Function, Kind, Limits, RegExp, Value, ValueError};

fn samples() -> Vec<(Value, Kind)> {
    vec![
        (Value::Undefined, Kind::Primitive),
        (Value::Null, Kind::Primitive),
        (Value::from(false), Kind::Primitive),
        (Value::from(0), Kind::Primitive),
        (Value::from(f64::NAN), Kind::Primitive),
        (Value::from(""), Kind::Primitive),
        (Value::from(json!([])), Kind::Array),
        (Value::from(json!([[], {}])), Kind::Array),
        (Value::from(json!({})), Kind::PlainObject),
        (Value::from(json!({"length": 0})), Kind::PlainObject),
        (Value::from(Date::now()), Kind::Date),
        (Value::from(Date::invalid()), Kind::Date),
        (Value::from(RegExp::new("x", "y").unwrap()), Kind::RegExp),
        (Value::from(Function::new("() => 1")), Kind::Function),
    ]
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

#[test]
fn classify_matrix() {
    for (value, kind) in samples() {
        assert_eq!(classify(&value), kind, "{value:?}");
        assert_eq!(value.shape().kind(), kind);
        assert_eq!(value.is_primitive(), kind == Kind::Primitive);
    }
}

#[test]
fn array_like_object_is_not_an_array() {
    let v = Value::from(json!({"0": "a", "length": 1}));
    assert_eq!(classify(&v), Kind::PlainObject);
    assert!(!is_array(&v));
}

// ---------------------------------------------------------------------------
// predicates
// ---------------------------------------------------------------------------

#[test]
fn exactly_one_structured_predicate_holds() {
    for (value, kind) in samples() {
        let hits = [
            is_array(&value),
            is_object(&value),
            is_date(&value),
            is_regexp(&value),
            is_function(&value),
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count();
        let expected = usize::from(kind != Kind::Primitive);
        assert_eq!(hits, expected, "{value:?}");
    }
}

#[test]
fn primitive_predicates() {
    assert!(is_boolean(&Value::from(true)));
    assert!(is_string(&Value::from("s")));
    assert!(is_number(&Value::from(-0.0)));
    assert!(!is_number(&Value::from(f64::NAN)));
}

// ---------------------------------------------------------------------------
// errors and limits
// ---------------------------------------------------------------------------

#[test]
fn error_messages() {
    assert_eq!(
        ValueError::DepthLimitExceeded { limit: 4 }.to_string(),
        "nesting depth exceeds limit of 4"
    );
    assert_eq!(
        ValueError::InvalidRegExpFlags("zz".into()).to_string(),
        "invalid regular expression flags: \"zz\""
    );
}

#[test]
fn limits_deserialize_with_defaults() {
    let limits: Limits = serde_json::from_value(json!({})).unwrap();
    assert_eq!(limits.max_depth, Limits::DEFAULT_MAX_DEPTH);
    let limits: Limits = serde_json::from_value(json!({"max_depth": 3})).unwrap();
    assert_eq!(limits, Limits::new(3));
}
