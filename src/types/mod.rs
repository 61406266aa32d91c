mod attribute_value;
mod comparison_operator;
mod select;
mod state;

pub use attribute_value::AttributeValue;
pub use comparison_operator::ComparisonOperator;
pub use select::Select;
pub use state::State;

use aws_sdk_dynamodb::{primitives, types};
use std::collections::HashMap;

/// A record returned by scan or query, passed through as the store sent it.
pub type Item = HashMap<String, AttributeValue>;

/// `LastEvaluatedKey` of a page. Sent back untouched as `ExclusiveStartKey`.
pub type Key = HashMap<String, types::AttributeValue>;

fn into_str(blob: primitives::Blob) -> String {
    String::from_utf8_lossy(&blob.into_inner()).into_owned()
}

pub(crate) fn into_item(value: HashMap<String, types::AttributeValue>) -> Item {
    value
        .into_iter()
        .map(|(key, val)| (key, AttributeValue::from(val)))
        .collect()
}
