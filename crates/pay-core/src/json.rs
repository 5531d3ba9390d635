//! # Loose JSON Helpers
//!
//! Booking forms and provider webhooks send loosely typed JSON. These helpers
//! give a single definition of "present" (truthy) and of how a value is
//! rendered into a notification.

use serde_json::Value;

/// Whether a value counts as present.
///
/// `null`, `false`, `0`, `""` are absent; everything else, including empty
/// arrays and objects, is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field of an object, only if present and truthy
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_truthy(v))
}

/// First truthy field among `keys`, in order
pub fn first_truthy<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| truthy_field(value, key))
}

/// Render a value as plain text for a notification.
///
/// Strings are unquoted, whole floats drop their fraction (`120.0` → `120`),
/// arrays and objects fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Render a field, or an empty string when it is absent or falsy
pub fn display_field(value: &Value, key: &str) -> String {
    truthy_field(value, key).map(display_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-3)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_first_truthy_skips_falsy() {
        let event = json!({"amount": 0, "transaction_amount": 45.5});
        assert_eq!(
            first_truthy(&event, &["amount", "transaction_amount"]),
            Some(&json!(45.5))
        );
        assert_eq!(first_truthy(&event, &["status", "transaction_status"]), None);
    }

    #[test]
    fn test_field_access_on_non_objects() {
        assert_eq!(truthy_field(&json!("just a string"), "amount"), None);
        assert_eq!(truthy_field(&Value::Null, "amount"), None);
        assert_eq!(display_field(&json!([1, 2]), "route"), "");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Heathrow")), "Heathrow");
        assert_eq!(display_value(&json!(120)), "120");
        assert_eq!(display_value(&json!(120.0)), "120");
        assert_eq!(display_value(&json!(99.5)), "99.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(null)), "");
    }

    #[test]
    fn test_display_field_defaults_to_empty() {
        let meta = json!({"name": "Ada", "phone": "", "pickup": null});
        assert_eq!(display_field(&meta, "name"), "Ada");
        assert_eq!(display_field(&meta, "phone"), "");
        assert_eq!(display_field(&meta, "pickup"), "");
        assert_eq!(display_field(&meta, "dropoff"), "");
    }
}
