//! Request types sent with clipboard actions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifies the application performing a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Name of the running application.
    pub name: String,
    /// UUID of the running application.
    pub uuid: String,
}

/// Payload for a single-format write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<WriteOptions>,
}

impl WriteRequest {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, name: impl Into<String>, uuid: impl Into<String>) -> Self {
        self.options = Some(WriteOptions {
            name: name.into(),
            uuid: uuid.into(),
        });
        self
    }
}

/// Payload for writing several formats at once, keyed by format
/// identifier (`"text"`, `"html"`, `"rtf"`, ...).
///
/// Encodes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WriteAnyRequest {
    formats: BTreeMap<String, String>,
}

impl WriteAnyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>, data: impl Into<String>) -> Self {
        self.insert(format, data);
        self
    }

    /// Set the data for `format`, returning what was there before.
    pub fn insert(&mut self, format: impl Into<String>, data: impl Into<String>) -> Option<String> {
        self.formats.insert(format.into(), data.into())
    }

    pub fn get(&self, format: &str) -> Option<&str> {
        self.formats.get(format).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for WriteAnyRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            formats: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Selects which clipboard the remote operates on (e.g. `"selection"`).
///
/// Opaque to the client; sent as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipboardType(String);

impl ClipboardType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClipboardType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ClipboardType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ClipboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_request_without_options() {
        let value = serde_json::to_value(WriteRequest::new("hello")).unwrap();
        assert_eq!(value, json!({ "data": "hello" }));
    }

    #[test]
    fn test_write_request_with_options() {
        let request = WriteRequest::new("hello").with_options("notes", "1234-abcd");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "data": "hello", "options": { "name": "notes", "uuid": "1234-abcd" } })
        );
    }

    #[test]
    fn test_write_any_request_is_flat_object() {
        let request = WriteAnyRequest::new()
            .with_format("text", "a")
            .with_format("html", "<b>a</b>");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "text": "a", "html": "<b>a</b>" }));
    }

    #[test]
    fn test_write_any_request_insert_replaces() {
        let mut request: WriteAnyRequest = [("text", "a")].into_iter().collect();
        assert_eq!(request.insert("text", "b"), Some("a".to_string()));
        assert_eq!(request.get("text"), Some("b"));
        assert_eq!(request.len(), 1);
        assert!(!request.is_empty());
    }

    #[test]
    fn test_clipboard_type_is_bare_string() {
        let value = serde_json::to_value(ClipboardType::from("selection")).unwrap();
        assert_eq!(value, json!("selection"));
        assert_eq!(ClipboardType::new("clipboard").to_string(), "clipboard");
    }
}
