use super::into_str;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use std::collections::HashMap;

/// DynamoDB typed value in its low-level JSON shape, e.g. `{"S": "foo"}`.
///
/// Items go back to Ansible as plain JSON, so binary values cannot travel as
/// bytes. `B` and `BS` blobs are decoded as UTF-8 text, with invalid
/// sequences replaced by U+FFFD, rather than base64 encoded. Type tags the
/// SDK does not know about come out as `"UNKNOWN"`.
#[derive(Debug, Serialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeValue {
    /// Blob as lossy UTF-8 text.
    B(String),
    Bool(bool),
    /// Blob set, each member as lossy UTF-8 text.
    Bs(Vec<String>),
    L(Vec<AttributeValue>),
    M(HashMap<String, AttributeValue>),
    N(String),
    Ns(Vec<String>),
    Null(bool),
    S(String),
    Ss(Vec<String>),
    Unknown,
}

impl From<types::AttributeValue> for AttributeValue {
    fn from(value: types::AttributeValue) -> AttributeValue {
        match value {
            types::AttributeValue::B(v) => AttributeValue::B(into_str(v)),
            types::AttributeValue::Bool(v) => AttributeValue::Bool(v),
            types::AttributeValue::Bs(v) => {
                AttributeValue::Bs(v.into_iter().map(into_str).collect())
            }
            types::AttributeValue::L(v) => {
                AttributeValue::L(v.into_iter().map(AttributeValue::from).collect())
            }
            types::AttributeValue::M(v) => AttributeValue::M(
                v.into_iter()
                    .map(|(key, val)| (key, AttributeValue::from(val)))
                    .collect(),
            ),
            types::AttributeValue::N(v) => AttributeValue::N(v),
            types::AttributeValue::Ns(v) => AttributeValue::Ns(v),
            types::AttributeValue::Null(v) => AttributeValue::Null(v),
            types::AttributeValue::S(v) => AttributeValue::S(v),
            types::AttributeValue::Ss(v) => AttributeValue::Ss(v),
            _ => AttributeValue::Unknown,
        }
    }
}
