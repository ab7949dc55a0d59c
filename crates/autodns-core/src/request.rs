//! Command builder: turns a [`Command`] into the `<request>` document.

use xmltree::{Element, EmitterConfig, XMLNode};

use crate::error::{AutoDnsError, Result};
use crate::tree::{append_text, append_value};
use crate::types::{Command, Credentials, TaskBody};

/// Language used when the caller does not pick one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Build the XML request document for one command.
///
/// The output is rooted at `<request>` with `<auth>`, `<language>` and
/// `<task>` children. An object command needs at least one object
/// element, so an empty array payload is rejected. Everything else is
/// left for the gateway to validate.
pub fn build_request(
    credentials: &Credentials,
    language: Option<&str>,
    command: &Command,
) -> Result<String> {
    let mut request = Element::new("request");

    let mut auth = Element::new("auth");
    append_text(&mut auth, "user", &credentials.user);
    append_text(&mut auth, "password", &credentials.password);
    append_text(&mut auth, "context", &credentials.context);
    request.children.push(XMLNode::Element(auth));

    append_text(
        &mut request,
        "language",
        language.unwrap_or(DEFAULT_LANGUAGE),
    );

    request
        .children
        .push(XMLNode::Element(build_task(credentials, command)?));

    let mut out = Vec::new();
    request
        .write_with_config(&mut out, EmitterConfig::new().perform_indent(false))
        .map_err(|e| AutoDnsError::Encoding(e.to_string()))?;
    String::from_utf8(out).map_err(|e| AutoDnsError::Encoding(e.to_string()))
}

fn build_task(credentials: &Credentials, command: &Command) -> Result<Element> {
    let mut task = Element::new("task");
    append_text(&mut task, "code", &command.code);

    if let Some(defaults) = &command.defaults {
        append_value(&mut task, "default", defaults);
    }

    match &command.body {
        TaskBody::Object {
            object_type,
            payload,
        } => {
            if payload.as_array().is_some_and(Vec::is_empty) {
                return Err(AutoDnsError::InvalidRequest(format!(
                    "command {} has no <{object_type}> entries",
                    command.code
                )));
            }
            append_value(&mut task, object_type.as_str(), payload);
        }
        TaskBody::Raw(fields) => {
            for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "code") {
                append_value(&mut task, key, value);
            }
        }
    }

    if command.reply_to {
        let email = credentials.email.as_deref().ok_or_else(|| {
            AutoDnsError::Config(format!(
                "command {} routes replies by email but no notification email is configured",
                command.code
            ))
        })?;
        append_text(&mut task, "reply_to", email);
    }

    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{codes, ObjectType};
    use serde_json::{json, Map};

    fn creds() -> Credentials {
        Credentials::new("user1", "secret", "4").with_email("ops@example.com")
    }

    fn child_count(element: &Element, name: &str) -> usize {
        element
            .children
            .iter()
            .filter(|node| matches!(node, XMLNode::Element(e) if e.name == name))
            .count()
    }

    fn parse_task(xml: &str) -> Element {
        let root = Element::parse(xml.as_bytes()).unwrap();
        assert_eq!(root.name, "request");
        root.get_child("task").unwrap().clone()
    }

    #[test]
    fn test_get_domain_document() {
        let cmd = Command::new(
            codes::DOMAIN_INFO,
            ObjectType::Domain,
            json!({"name": "example.com"}),
        );
        let xml = build_request(&creds(), None, &cmd).unwrap();

        assert!(xml.contains(
            "<task><code>0105</code><domain><name>example.com</name></domain></task>"
        ));
        assert!(xml.contains("<language>en</language>"));
        assert!(xml.contains(
            "<auth><user>user1</user><password>secret</password><context>4</context></auth>"
        ));
        assert!(!xml.contains("reply_to"));
    }

    #[test]
    fn test_task_structure_counts() {
        let cmd = Command::new(codes::ZONE_CREATE, ObjectType::Zone, json!({"name": "a.de"}))
            .with_defaults(Some(json!({"soa": {"refresh": 43200}})));
        let task = parse_task(&build_request(&creds(), Some("de"), &cmd).unwrap());

        assert_eq!(child_count(&task, "code"), 1);
        assert_eq!(child_count(&task, "default"), 1);
        assert_eq!(child_count(&task, "zone"), 1);
        assert_eq!(child_count(&task, "domain"), 0);
    }

    #[test]
    fn test_no_default_block_without_defaults() {
        let cmd = Command::new(codes::ZONE_DELETE, ObjectType::Zone, json!({"name": "a.de"}));
        let task = parse_task(&build_request(&creds(), None, &cmd).unwrap());
        assert_eq!(child_count(&task, "default"), 0);
    }

    #[test]
    fn test_reply_to_uses_configured_email() {
        let cmd = Command::new(
            codes::DOMAIN_TRANSFER_IN,
            ObjectType::Domain,
            json!([{"name": "a.com"}, {"name": "b.com"}]),
        )
        .with_reply_to(true);
        let task = parse_task(&build_request(&creds(), None, &cmd).unwrap());

        assert_eq!(child_count(&task, "domain"), 2);
        let reply_to = task.get_child("reply_to").unwrap();
        assert_eq!(reply_to.get_text().unwrap(), "ops@example.com");
    }

    #[test]
    fn test_reply_to_without_email_is_config_error() {
        let cmd = Command::new(codes::DOMAIN_TRANSFER_IN, ObjectType::Domain, json!({}))
            .with_reply_to(true);
        let err = build_request(&Credentials::new("u", "p", "4"), None, &cmd).unwrap_err();
        assert!(matches!(err, AutoDnsError::Config(_)));
    }

    #[test]
    fn test_empty_object_list_is_rejected() {
        let command = Command::new(codes::DOMAIN_TRANSFER_IN, ObjectType::Domain, json!([]));
        let err = build_request(&creds(), None, &command).unwrap_err();
        assert!(matches!(err, AutoDnsError::InvalidRequest(_)));
    }

    #[test]
    fn test_raw_task_keeps_single_code() {
        let mut fields = Map::new();
        fields.insert("code".into(), json!("9999"));
        fields.insert("view".into(), json!({"limit": 5}));
        fields.insert("key".into(), json!(["created", "changed"]));
        let cmd = Command::raw(codes::ZONE_INFO, fields);
        let task = parse_task(&build_request(&creds(), None, &cmd).unwrap());

        assert_eq!(child_count(&task, "code"), 1);
        assert_eq!(task.get_child("code").unwrap().get_text().unwrap(), "0205");
        assert_eq!(child_count(&task, "key"), 2);
        assert_eq!(child_count(&task, "zone"), 0);
    }

    #[test]
    fn test_text_is_escaped() {
        let creds = Credentials::new("u", "p<&>", "4");
        let cmd = Command::new(codes::DOMAIN_INFO, ObjectType::Domain, json!({"name": "x"}));
        let xml = build_request(&creds, None, &cmd).unwrap();
        assert!(xml.contains("p&lt;&amp;"));

        let root = Element::parse(xml.as_bytes()).unwrap();
        let password = root.get_child("auth").unwrap().get_child("password").unwrap();
        assert_eq!(password.get_text().unwrap(), "p<&>");
    }
}
