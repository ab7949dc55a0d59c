//! Conversion between `serde_json::Value` payloads and XML element trees.
//!
//! Requests: objects become child elements, arrays become repeated
//! siblings, scalars become text, `null` becomes an empty element.
//!
//! Responses: leaf elements become strings, elements with children become
//! objects. Which element paths are sequences is declared up front by a
//! [`ResponseSchema`] instead of being guessed from the document; a
//! repeated element outside the schema is rejected.

use serde_json::{Map, Value};
use xmltree::{Element, XMLNode};

use crate::error::{AutoDnsError, Result};

/// Element paths (dot separated, relative to `<result>`) that always
/// decode as arrays, even with a single entry or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSchema {
    sequences: &'static [&'static str],
}

impl ResponseSchema {
    /// Paths that are sequences for every operation
    const ALWAYS: &'static [&'static str] = &["msg"];

    /// Schema with no operation-specific sequences
    pub const EMPTY: Self = Self::new(&[]);

    /// Schema declaring the given paths as sequences
    #[must_use]
    pub const fn new(sequences: &'static [&'static str]) -> Self {
        Self { sequences }
    }

    /// Returns true if the element at `path` is always a sequence
    #[must_use]
    pub fn is_sequence(&self, path: &str) -> bool {
        Self::ALWAYS.contains(&path) || self.sequences.contains(&path)
    }

    /// Names of declared sequences directly below `path`
    fn sequences_under<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        Self::ALWAYS
            .iter()
            .chain(self.sequences.iter())
            .copied()
            .filter_map(move |declared: &'static str| {
                let rest = if path.is_empty() {
                    declared
                } else {
                    declared.strip_prefix(path)?.strip_prefix('.')?
                };
                (!rest.contains('.')).then_some(rest)
            })
    }
}

/// Append `value` under `parent` as element(s) named `name`.
///
/// Arrays expand to one sibling per entry.
pub(crate) fn append_value(parent: &mut Element, name: &str, value: &Value) {
    if let Value::Array(items) = value {
        for item in items {
            append_value(parent, name, item);
        }
        return;
    }
    parent.children.push(XMLNode::Element(value_to_element(name, value)));
}

/// Append a plain text element
pub(crate) fn append_text(parent: &mut Element, name: &str, text: &str) {
    append_value(parent, name, &Value::String(text.to_string()));
}

fn value_to_element(name: &str, value: &Value) -> Element {
    let mut element = Element::new(name);
    match value {
        Value::Null => {}
        Value::Bool(b) => element.children.push(XMLNode::Text(b.to_string())),
        Value::Number(n) => element.children.push(XMLNode::Text(n.to_string())),
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => element.children.push(XMLNode::Text(s.clone())),
        Value::Object(fields) => {
            for (key, field) in fields {
                append_value(&mut element, key, field);
            }
        }
        Value::Array(items) => {
            for item in items {
                append_value(&mut element, name, item);
            }
        }
    }
    element
}

/// Convert a response element into a value tree.
///
/// `path` is the dotted path of `element` relative to the schema root.
pub(crate) fn element_to_value(
    element: &Element,
    path: &str,
    schema: &ResponseSchema,
) -> Result<Value> {
    let children: Vec<&Element> = element
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(child) => Some(child),
            _ => None,
        })
        .collect();

    let mut declared = schema.sequences_under(path).peekable();
    if children.is_empty() && declared.peek().is_none() {
        return Ok(Value::String(text_of(element)));
    }

    let mut fields = Map::new();
    for name in declared {
        fields.insert(name.to_string(), Value::Array(Vec::new()));
    }

    for child in children {
        let child_path = if path.is_empty() {
            child.name.clone()
        } else {
            format!("{path}.{}", child.name)
        };
        let value = element_to_value(child, &child_path, schema)?;

        if schema.is_sequence(&child_path) {
            match fields.get_mut(&child.name) {
                Some(Value::Array(items)) => items.push(value),
                _ => {
                    fields.insert(child.name.clone(), Value::Array(vec![value]));
                }
            }
        } else if fields.contains_key(&child.name) {
            return Err(AutoDnsError::MalformedResponse(format!(
                "<{child_path}> repeats but is not a declared sequence"
            )));
        } else {
            fields.insert(child.name.clone(), value);
        }
    }

    Ok(Value::Object(fields))
}

fn text_of(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(text) | XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
