use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a recommended item, unique within one response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireItemId")]
pub struct ItemId(pub String);

/// Backends disagree on whether `item_id` is a string or an integer primary key.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireItemId {
    Text(String),
    Integer(i64),
}

impl From<WireItemId> for ItemId {
    fn from(value: WireItemId) -> Self {
        match value {
            WireItemId::Text(text) => Self(text),
            WireItemId::Integer(number) => Self(number.to_string()),
        }
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
