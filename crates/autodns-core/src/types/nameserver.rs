use serde::{Deserialize, Serialize};

/// Nameserver entry as used inside zone payloads (`<nserver><name>..`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameserver {
    /// Fully qualified nameserver host name
    pub name: String,
}

impl Nameserver {
    /// Create a nameserver entry
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The gateway's own nameserver set, the usual choice for new zones
pub const DEFAULT_NAMESERVERS: [&str; 4] = ["a.ns14.net", "b.ns14.net", "c.ns14.net", "d.ns14.net"];

/// Default nameservers as payload-ready entries
#[must_use]
pub fn default_nameservers() -> Vec<Nameserver> {
    DEFAULT_NAMESERVERS.iter().map(|ns| Nameserver::new(*ns)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nameservers() {
        let ns = default_nameservers();
        assert_eq!(ns.len(), 4);
        assert_eq!(ns[0].name, "a.ns14.net");
        assert_eq!(ns[3].name, "d.ns14.net");
    }

    #[test]
    fn test_nameserver_serializes_as_name_object() {
        let value = serde_json::to_value(Nameserver::new("a.ns14.net")).unwrap();
        assert_eq!(value, serde_json::json!({"name": "a.ns14.net"}));
    }
}
