use serde::{Deserialize, Serialize};

/// Error envelope the backend attaches to non-success responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// structured entries, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Array(entries) => entries
                .iter()
                .map(|entry| match entry.get("msg").and_then(|msg| msg.as_str()) {
                    Some(msg) => msg.to_string(),
                    None => entry.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}
