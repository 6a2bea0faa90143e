//! Primitive coercions of raw values
//!
//! These never fail: a value of the wrong kind coerces to a fixed fallback
//! (`false`, `None`, or `0`). Key-path indirection needs a theme to resolve
//! against and lives in [`Theme`](crate::Theme); these helpers only look at the
//! value in hand.

use crate::value::Value;

/// Booleans and numbers; a number is true when non-zero
pub fn to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Integer(i)) => *i != 0,
        Some(Value::Float(f)) => *f != 0.0,
        _ => false,
    }
}

/// Strings as-is, numbers rendered with their shortest decimal form
pub fn to_string_literal(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

/// Numbers truncated toward zero
pub fn to_integer(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Integer(i)) => *i,
        Some(other) => other.as_f64().map(|f| f as i64).unwrap_or(0),
        None => 0,
    }
}

/// Numbers as `f64`, without following key paths
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    value?.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accepts_only_numeric_like_values() {
        assert!(to_bool(Some(&Value::Bool(true))));
        assert!(to_bool(Some(&Value::Integer(2))));
        assert!(!to_bool(Some(&Value::Float(0.0))));
        assert!(!to_bool(Some(&Value::from("true"))));
        assert!(!to_bool(None));
    }

    #[test]
    fn numbers_render_as_strings() {
        assert_eq!(to_string_literal(Some(&Value::Integer(12))), Some("12".into()));
        assert_eq!(to_string_literal(Some(&Value::Float(1.5))), Some("1.5".into()));
        assert_eq!(to_string_literal(Some(&Value::Float(2.0))), Some("2".into()));
        assert_eq!(to_string_literal(Some(&Value::Bool(true))), None);
    }

    #[test]
    fn integers_truncate() {
        assert_eq!(to_integer(Some(&Value::Float(3.9))), 3);
        assert_eq!(to_integer(Some(&Value::Float(-3.9))), -3);
        assert_eq!(to_integer(Some(&Value::Bool(true))), 1);
        assert_eq!(to_integer(Some(&Value::from("7"))), 0);
    }
}
