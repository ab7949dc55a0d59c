use serde_json::{json, Value};

use crate::error::AutoDnsError;

/// One object addressed by a lookup or delete
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// Bare name, sent as `{"name": ...}`
    Name(String),
    /// Full object payload
    Object(Value),
}

impl Identifier {
    /// Payload sent inside the object element
    #[must_use]
    pub fn into_payload(self) -> Value {
        match self {
            Self::Name(name) => json!({ "name": name }),
            Self::Object(payload) => payload,
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Value> for Identifier {
    fn from(payload: Value) -> Self {
        Self::Object(payload)
    }
}

/// Input shape of a lookup, chosen by the caller instead of inferred.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Single object by name
    Name(String),
    /// Single object by payload
    Object(Value),
    /// One independent request per entry
    Batch(Vec<Identifier>),
}

impl From<Identifier> for Target {
    fn from(id: Identifier) -> Self {
        match id {
            Identifier::Name(name) => Self::Name(name),
            Identifier::Object(payload) => Self::Object(payload),
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl<I: Into<Identifier>> From<Vec<I>> for Target {
    fn from(items: Vec<I>) -> Self {
        Self::Batch(items.into_iter().map(Into::into).collect())
    }
}

/// Outcome of one entry in a batch: the payload or that entry's own error
pub type BatchItem = Result<Value, AutoDnsError>;

/// Result of a [`Target`] lookup, mirroring the input shape
#[derive(Debug)]
pub enum Lookup {
    /// Payload for a single-object target
    Single(Value),
    /// Per-entry outcomes in input order
    Batch(Vec<BatchItem>),
}

impl Lookup {
    /// Successful payloads, dropping failed batch entries
    #[must_use]
    pub fn successes(self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value],
            Self::Batch(items) => items.into_iter().filter_map(Result::ok).collect(),
        }
    }
}
