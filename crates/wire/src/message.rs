//! Response envelope returned by every action.

use crate::error::WireError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The data portion of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Result of the action. `Null` when the remote sent nothing.
    #[serde(default)]
    pub data: Value,
}

/// A resolved action: `{ "payload": { "data": ... } }`.
///
/// Any other envelope fields the remote sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub payload: ResponsePayload,
}

impl ActionResponse {
    /// Wrap `data` in the response envelope.
    pub fn new(data: impl Into<Value>) -> Self {
        Self {
            payload: ResponsePayload { data: data.into() },
        }
    }

    /// Decode an envelope from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, WireError> {
        serde_json::from_str(text).map_err(|e| WireError::MalformedResponse(e.to_string()))
    }

    /// Borrow `payload.data`.
    pub fn data(&self) -> &Value {
        &self.payload.data
    }

    /// Project `payload.data` into `T`.
    ///
    /// Fails with [`WireError::MalformedResponse`] when the data does not have
    /// the shape of `T`, including when it is absent and `T` cannot be null.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, WireError> {
        serde_json::from_value(self.payload.data)
            .map_err(|e| WireError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_envelope() {
        let response = ActionResponse::from_json(r#"{"payload":{"data":"hello"}}"#).unwrap();
        assert_eq!(response.data(), &json!("hello"));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let text = r#"{"action":"clipboard-read-text","success":true,"payload":{"data":["a"],"reason":""}}"#;
        let response = ActionResponse::from_json(text).unwrap();
        assert_eq!(response.into_data::<Vec<String>>().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_missing_data_is_null() {
        let response = ActionResponse::from_json(r#"{"payload":{}}"#).unwrap();
        assert_eq!(response.data(), &Value::Null);
        assert_eq!(response.into_data::<Option<String>>().unwrap(), None);
    }

    #[test]
    fn test_missing_payload_is_malformed() {
        let err = ActionResponse::from_json(r#"{"data":"hello"}"#).unwrap_err();
        assert!(matches!(err, WireError::MalformedResponse(_)));
    }

    #[test]
    fn test_into_data_wrong_shape() {
        let err = ActionResponse::new(42).into_data::<String>().unwrap_err();
        assert!(matches!(err, WireError::MalformedResponse(_)));

        let err = ActionResponse::default().into_data::<String>().unwrap_err();
        assert!(matches!(err, WireError::MalformedResponse(_)));
    }
}
