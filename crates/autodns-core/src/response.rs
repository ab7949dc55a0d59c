//! Response interpreter: parses the gateway reply and classifies it.

use xmltree::Element;

use crate::error::{AutoDnsError, Result};
use crate::tree::{element_to_value, ResponseSchema};
use crate::types::ResponseResult;

/// Parse a raw response body into a classified [`ResponseResult`].
///
/// A status code starting with `E` turns the whole `<result>` block into
/// [`AutoDnsError::Protocol`]; every other code is a success.
pub fn interpret(raw: &str, schema: &ResponseSchema) -> Result<ResponseResult> {
    classify(parse_result(raw, schema)?)
}

/// Parse `<response><result>` without classifying the status.
pub fn parse_result(raw: &str, schema: &ResponseSchema) -> Result<ResponseResult> {
    let root = Element::parse(raw.as_bytes()).map_err(|e| AutoDnsError::Xml(e.to_string()))?;

    if root.name != "response" {
        return Err(AutoDnsError::MalformedResponse(format!(
            "expected <response> root element, found <{}>",
            root.name
        )));
    }

    let result = root
        .get_child("result")
        .ok_or_else(|| AutoDnsError::MalformedResponse("missing <result> element".into()))?;

    let tree = element_to_value(result, "", schema)?;
    serde_json::from_value(tree)
        .map_err(|e| AutoDnsError::MalformedResponse(format!("invalid <result> block: {e}")))
}

/// Split a parsed result into success or [`AutoDnsError::Protocol`].
pub fn classify(result: ResponseResult) -> Result<ResponseResult> {
    if result.status.is_error() {
        Err(AutoDnsError::Protocol(Box::new(result)))
    } else {
        Ok(result)
    }
}
