use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `<status>` block of a gateway response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Status code, e.g. "S0105" or "E0105"
    pub code: String,

    /// Human readable status text
    #[serde(default)]
    pub text: Option<String>,

    /// Status type ("success", "error", "notify", ...)
    #[serde(default, rename = "type")]
    pub status_type: Option<String>,
}

impl Status {
    /// Leading character that marks a failed command
    pub const ERROR_PREFIX: char = 'E';

    /// Returns true if the code carries the error prefix.
    ///
    /// This is the only success/failure signal; HTTP status is never used.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.code.starts_with(Self::ERROR_PREFIX)
    }

    /// Returns true for every code without the error prefix
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }
}

/// Parsed `<response><result>` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseResult {
    /// Result status
    pub status: Status,

    /// `<msg>` entries the gateway attached (always a sequence)
    #[serde(default)]
    pub msg: Vec<Value>,

    /// `<data>` tree, keyed by object type
    #[serde(default)]
    pub data: Option<Value>,
}

impl ResponseResult {
    /// Data entry for one object type (`data.<object_type>`)
    #[must_use]
    pub fn data_for(&self, object_type: &str) -> Option<&Value> {
        self.data.as_ref()?.get(object_type)
    }

    /// Take the data entry for one object type out of the result
    #[must_use]
    pub fn take_data_for(&mut self, object_type: &str) -> Option<Value> {
        self.data.as_mut()?.as_object_mut()?.remove(object_type)
    }

    /// Text of every message, for display
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.msg
            .iter()
            .filter_map(|m| match m {
                Value::String(s) => Some(s.clone()),
                Value::Object(fields) => fields
                    .get("text")
                    .and_then(Value::as_str)
                    .map(String::from),
                _ => None,
            })
            .collect()
    }
}
