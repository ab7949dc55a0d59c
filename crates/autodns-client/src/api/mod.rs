//! Operation endpoints, grouped by object type.

mod domain;
mod zone;

pub use domain::DomainApi;
pub use zone::ZoneApi;

use autodns_core::{ObjectType, ResponseResult};
use serde_json::Value;

/// Pull `data.<object_type>` out of a successful result.
///
/// The status code alone decides success, so a reply without the block
/// yields `Value::Null`.
fn take_data(mut result: ResponseResult, object_type: &ObjectType) -> Value {
    result
        .take_data_for(object_type.as_str())
        .unwrap_or(Value::Null)
}
