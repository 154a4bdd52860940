//! Contact form normalization
//!
//! Turns the raw request body into a [`ContactForm`] with trimmed string
//! fields and a boolean consent flag. Missing or falsy values become empty
//! strings so that the validator sees one canonical shape. Non-string
//! values are stringified the way a browser would (`["a", "b"]` becomes
//! `a,b`, objects become `[object Object]`).

use serde_json::{Map, Value};

/// Text of any plain JSON object after browser-style stringification
const OBJECT_TEXT: &str = "[object Object]";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is JSON null")]
    NullBody,
}

/// Normalized, not yet validated contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
}

impl ContactForm {
    /// Parse a raw request body
    ///
    /// An absent or empty body is treated as `{}`. Strings, numbers, booleans
    /// and arrays have no form fields and yield an empty form. A body that is
    /// not JSON, or is `null`, fails.
    pub fn from_body(body: Option<&[u8]>) -> Result<Self, FormError> {
        let value = match body {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(bytes)?,
            _ => Value::Object(Map::new()),
        };
        if value.is_null() {
            return Err(FormError::NullBody);
        }
        Ok(Self::from_value(&value))
    }

    /// Normalize an already parsed JSON value
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: text_field(value, "name"),
            email: text_field(value, "email"),
            phone: text_field(value, "phone"),
            message: text_field(value, "message"),
            consent: value.get("consent").is_some_and(is_truthy),
        }
    }
}

/// Read a field as trimmed text, falsy values becoming empty
fn text_field(value: &Value, key: &str) -> String {
    let Some(field) = value.get(key).filter(|field| is_truthy(field)) else {
        return String::new();
    };

    js_string(field).trim().to_string()
}

/// Stringify a value like JavaScript's `String(value)`
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_TEXT.to_string(),
    }
}

/// Integral floats print without a fraction (`1.0` becomes `1`)
fn js_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

/// Loose truthiness as submitted by browser forms
///
/// `null`, `false`, `0` and `""` are false, everything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, LinkPolicy, ValidationError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_fields_are_trimmed() {
        let form = ContactForm::from_value(&json!({
            "name": "  Anna Muster ",
            "email": "\tanna@example.com\n",
            "phone": " 030123456 ",
            "message": "  Hallo  ",
            "consent": true,
        }));

        assert_eq!(
            form,
            ContactForm {
                name: "Anna Muster".to_string(),
                email: "anna@example.com".to_string(),
                phone: "030123456".to_string(),
                message: "Hallo".to_string(),
                consent: true,
            }
        );
    }

    #[test]
    fn test_absent_and_null_fields_are_empty() {
        let form = ContactForm::from_value(&json!({ "name": null, "consent": null }));
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(ContactForm::from_body(None).unwrap(), ContactForm::default());
        assert_eq!(
            ContactForm::from_body(Some(b"".as_slice())).unwrap(),
            ContactForm::default()
        );
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(ContactForm::from_body(Some(b"{\"name\": ".as_slice())).is_err());
        assert!(ContactForm::from_body(Some(b"name=Anna".as_slice())).is_err());
    }

    #[test]
    fn test_null_body_is_an_error() {
        assert!(matches!(
            ContactForm::from_body(Some(b"null".as_slice())),
            Err(FormError::NullBody)
        ));
        assert!(matches!(
            ContactForm::from_body(Some(b"  null \n".as_slice())),
            Err(FormError::NullBody)
        ));
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert_eq!(
            ContactForm::from_body(Some(b"[1, 2, 3]".as_slice())).unwrap(),
            ContactForm::default()
        );
        assert_eq!(
            ContactForm::from_body(Some(b"\"hello\"".as_slice())).unwrap(),
            ContactForm::default()
        );
    }

    #[test]
    fn test_non_string_fields_are_coerced() {
        let form = ContactForm::from_value(&json!({
            "phone": 30123456,
            "name": false,
            "message": 0,
        }));
        assert_eq!(form.phone, "30123456");
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_consent_truthiness() {
        let consent = |v: Value| ContactForm::from_value(&json!({ "consent": v })).consent;

        assert!(consent(json!(true)));
        assert!(consent(json!("on")));
        assert!(consent(json!("false")));
        assert!(consent(json!(1)));
        assert!(consent(json!({})));

        assert!(!consent(json!(false)));
        assert!(!consent(json!("")));
        assert!(!consent(json!(0)));
        assert!(!consent(json!(null)));
    }

    #[test]
    fn test_arrays_and_objects_are_stringified_like_a_browser() {
        let form = ContactForm::from_value(&json!({
            "name": ["Anna"],
            "email": [],
            "phone": [30, null, "12", [4, 5]],
            "message": { "text": "Hallo" },
        }));
        assert_eq!(form.name, "Anna");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, "30,,12,4,5");
        assert_eq!(form.message, "[object Object]");
    }

    #[test]
    fn test_empty_array_name_is_missing() {
        let form = ContactForm::from_value(&json!({
            "name": [],
            "email": "anna@example.com",
            "message": "Ich interessiere mich für eine Beratung.",
            "consent": true,
        }));
        assert_eq!(
            validate(form, &LinkPolicy::default()).unwrap_err(),
            ValidationError::MissingRequired
        );
    }

    #[test]
    fn test_numbers_are_stringified_like_a_browser() {
        let form = ContactForm::from_value(&json!({
            "name": 1.0,
            "email": -2.5,
            "phone": 30123456,
            "message": true,
        }));
        assert_eq!(form.name, "1");
        assert_eq!(form.email, "-2.5");
        assert_eq!(form.phone, "30123456");
        assert_eq!(form.message, "true");
    }
}
