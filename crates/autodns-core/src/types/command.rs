use serde_json::{Map, Value};
use std::fmt;

/// Category of entity a command operates on.
///
/// The wire name doubles as the element name inside `<task>` and `<data>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Registered domain
    Domain,
    /// DNS zone
    Zone,
    /// Any other gateway object (handle, certificate, ...)
    Other(String),
}

impl ObjectType {
    /// Element name used on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Domain => "domain",
            Self::Zone => "zone",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known gateway command codes
pub mod codes {
    /// Transfer a domain in from another registrar
    pub const DOMAIN_TRANSFER_IN: &str = "0104";
    /// Domain info
    pub const DOMAIN_INFO: &str = "0105";
    /// Create a zone
    pub const ZONE_CREATE: &str = "0201";
    /// Update a zone
    pub const ZONE_UPDATE: &str = "0202";
    /// Delete a zone
    pub const ZONE_DELETE: &str = "0203";
    /// Zone info, also used for zone listings
    pub const ZONE_INFO: &str = "0205";
}

/// Contents of `<task>` besides the code.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskBody {
    /// One object element (or one per entry if `payload` is an array)
    Object {
        /// Element name for the payload
        object_type: ObjectType,
        /// Object fields
        payload: Value,
    },
    /// Caller-supplied task fields written verbatim (list queries)
    Raw(Map<String, Value>),
}

/// A single gateway command, built fresh for every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// 4-digit operation code
    pub code: String,
    /// Object block or raw task fields
    pub body: TaskBody,
    /// Values the gateway applies to omitted fields
    pub defaults: Option<Value>,
    /// Route asynchronous replies to the configured email
    pub reply_to: bool,
}

impl Command {
    /// Command operating on one object type
    #[must_use]
    pub fn new(code: impl Into<String>, object_type: ObjectType, payload: Value) -> Self {
        Self {
            code: code.into(),
            body: TaskBody::Object {
                object_type,
                payload,
            },
            defaults: None,
            reply_to: false,
        }
    }

    /// Command whose task fields are given verbatim
    #[must_use]
    pub fn raw(code: impl Into<String>, task: Map<String, Value>) -> Self {
        Self {
            code: code.into(),
            body: TaskBody::Raw(task),
            defaults: None,
            reply_to: false,
        }
    }

    /// Attach a `<default>` block
    #[must_use]
    pub fn with_defaults(mut self, defaults: Option<Value>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Request reply routing to the configured email
    #[must_use]
    pub const fn with_reply_to(mut self, reply_to: bool) -> Self {
        self.reply_to = reply_to;
        self
    }

    /// Object type of the payload, if this is not a raw command
    #[must_use]
    pub const fn object_type(&self) -> Option<&ObjectType> {
        match &self.body {
            TaskBody::Object { object_type, .. } => Some(object_type),
            TaskBody::Raw(_) => None,
        }
    }
}

/// Options shared by the write operations (transfer, zone create/update).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteOptions {
    /// Values applied by the gateway to fields the payload omits
    pub defaults: Option<Value>,
}

impl WriteOptions {
    /// Empty options
    #[must_use]
    pub const fn new() -> Self {
        Self { defaults: None }
    }

    /// Set the `<default>` block
    #[must_use]
    pub fn defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
        self
    }
}
