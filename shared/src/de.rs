//! Lenient field deserializers.
//!
//! The mock services emit identifiers and numbers sometimes as JSON numbers
//! and sometimes as strings, so the wire records accept both.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field that may arrive as a string, a number, or null
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::custom(format!("expected a number, found {value}")))
}

pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    count_value(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative count, found {value}")))
}

/// Sold flag. Never fails: numbers are true when non-zero, the string
/// "true" is true, and every other shape reads as false.
pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(flag_value(&Value::deserialize(deserializer)?))
}

fn flag_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.trim() == "true",
        _ => false,
    }
}

/// Non-negative integral count from a number or numeric string.
pub(crate) fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_value_accepts_numbers_and_numeric_strings() {
        assert_eq!(count_value(&json!(7)), Some(7));
        assert_eq!(count_value(&json!(7.0)), Some(7));
        assert_eq!(count_value(&json!("12")), Some(12));
        assert_eq!(count_value(&json!(" 3 ")), Some(3));
    }

    #[test]
    fn test_flag_value_never_rejects() {
        assert!(flag_value(&json!(true)));
        assert!(flag_value(&json!(1)));
        assert!(flag_value(&json!(-2.5)));
        assert!(flag_value(&json!("true")));

        assert!(!flag_value(&json!(false)));
        assert!(!flag_value(&json!(0)));
        assert!(!flag_value(&json!("false")));
        assert!(!flag_value(&json!("yes")));
        assert!(!flag_value(&json!(null)));
        assert!(!flag_value(&json!([true])));
        assert!(!flag_value(&json!({"sold": true})));
    }

    #[test]
    fn test_count_value_rejects_other_shapes() {
        assert_eq!(count_value(&json!(-1)), None);
        assert_eq!(count_value(&json!(2.5)), None);
        assert_eq!(count_value(&json!("many")), None);
        assert_eq!(count_value(&json!(null)), None);
        assert_eq!(count_value(&json!([1])), None);
    }
}
