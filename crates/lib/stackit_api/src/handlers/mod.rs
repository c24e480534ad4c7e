//! Request handlers.

pub mod chat;
pub mod health;
pub mod text;

use serde_json::{Map, Value};

/// Parses a request body into a JSON object.
///
/// Empty bodies, invalid JSON, `null` and non-object values all yield `None`.
pub(crate) fn json_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(body).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Returns `key` when it holds a non-empty string.
pub(crate) fn non_empty_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_rejects_non_objects() {
        assert!(json_object(b"").is_none());
        assert!(json_object(b"hello").is_none());
        assert!(json_object(b"null").is_none());
        assert!(json_object(b"[1, 2]").is_none());
        assert!(json_object(b"\"text\"").is_none());
        assert!(json_object(b"{}").is_some());
    }

    #[test]
    fn non_empty_str_skips_blank_and_non_strings() {
        let data = json_object(br#"{"a": "x", "b": "", "c": 3}"#).unwrap();
        assert_eq!(non_empty_str(&data, "a"), Some("x"));
        assert_eq!(non_empty_str(&data, "b"), None);
        assert_eq!(non_empty_str(&data, "c"), None);
        assert_eq!(non_empty_str(&data, "d"), None);
    }
}
