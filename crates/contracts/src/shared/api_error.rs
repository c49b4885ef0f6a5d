//! Error payloads returned by the REST server for rejected requests.
//!
//! The server answers 4xx with either a message object
//! (`{"detail": "..."}`, `{"message": "..."}`, `{"error": "..."}`) or a
//! field-keyed object (`{"phone": ["Invalid phone"], "products": [{"quantity": ["..."]}]}`).
//! Nested keys are flattened into dotted paths so they can be matched
//! against form field names.

use std::collections::BTreeMap;

use serde_json::Value;

const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];
const NON_FIELD_KEY: &str = "non_field_errors";

/// First error message per field path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Splits off errors whose path is not one of `known` fields
    pub fn partition_known(self, known: &[&str]) -> (FieldErrors, FieldErrors) {
        let (matched, unmatched): (BTreeMap<_, _>, BTreeMap<_, _>) = self
            .0
            .into_iter()
            .partition(|(path, _)| known.contains(&path.as_str()));
        (FieldErrors(matched), FieldErrors(unmatched))
    }
}

/// Parsed body of a rejected request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorPayload {
    pub message: Option<String>,
    pub fields: FieldErrors,
}

impl ErrorPayload {
    /// Never fails: an unparseable body simply yields no message
    pub fn parse(body: &str) -> Self {
        let mut payload = Self::default();
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            let trimmed = body.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('<') && trimmed.len() <= 200 {
                payload.message = Some(trimmed.to_string());
            }
            return payload;
        };

        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    if MESSAGE_KEYS.contains(&key.as_str()) || key == NON_FIELD_KEY {
                        if payload.message.is_none() {
                            payload.message = first_message(&value);
                        }
                    } else {
                        collect_fields(&key, &value, &mut payload.fields);
                    }
                }
            }
            Value::String(s) => payload.message = Some(s),
            Value::Array(_) => payload.message = first_message(&value),
            _ => {}
        }
        payload
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}

fn collect_fields(path: &str, value: &Value, out: &mut FieldErrors) {
    match value {
        Value::String(s) => out.insert(path, s.clone()),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.insert(path, s.clone()),
                    Value::Object(_) | Value::Array(_) => {
                        collect_fields(&format!("{}.{}", path, idx), item, out)
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                collect_fields(&format!("{}.{}", path, key), nested, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ErrorPayload::parse(r#"{"detail": "Not allowed"}"#).message.as_deref(),
            Some("Not allowed")
        );
        assert_eq!(
            ErrorPayload::parse(r#"{"non_field_errors": ["Duplicate name"]}"#)
                .message
                .as_deref(),
            Some("Duplicate name")
        );
    }

    #[test]
    fn test_field_errors_flattened() {
        let payload = ErrorPayload::parse(
            r#"{"phone": ["Invalid phone", "Too short"], "products": [{}, {"quantity": ["Must be positive"]}]}"#,
        );
        assert_eq!(payload.message, None);
        assert_eq!(payload.fields.get("phone"), Some("Invalid phone"));
        assert_eq!(payload.fields.get("products.1.quantity"), Some("Must be positive"));
    }

    #[test]
    fn test_partition_known() {
        let payload = ErrorPayload::parse(r#"{"phone": "bad", "unknown": "x"}"#);
        let (known, rest) = payload.fields.partition_known(&["phone", "name"]);
        assert_eq!(known.get("phone"), Some("bad"));
        assert_eq!(rest.get("unknown"), Some("x"));
    }

    #[test]
    fn test_html_body_is_not_a_message() {
        assert_eq!(ErrorPayload::parse("<html>502</html>").message, None);
        assert_eq!(ErrorPayload::parse("").message, None);
    }
}
