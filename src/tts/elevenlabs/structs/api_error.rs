use serde::Deserialize;

/// Error body returned by the vendor API.
///
/// `detail` is either a plain string or an object carrying `status` and
/// `message` fields, depending on the failure.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorResponse {
    /// Best-effort human-readable message out of the `detail` payload.
    pub fn message(&self) -> String {
        match &self.detail {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(serde_json::Value::Object(detail)) => {
                match detail.get("message").and_then(|m| m.as_str()) {
                    Some(message) => message.to_string(),
                    None => serde_json::Value::Object(detail.clone()).to_string(),
                }
            }
            Some(other) => other.to_string(),
            None => "unknown vendor error".to_string(),
        }
    }
}
