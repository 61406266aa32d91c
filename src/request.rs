use super::{
    params::Params,
    types::{AttributeValue, ComparisonOperator, Key, Select, State},
};

use aws_sdk_dynamodb::types;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

pub type Conditions = HashMap<String, Condition>;

/// A single-value condition. The value is always sent as a string (`S`).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    #[serde(rename = "AttributeValueList", serialize_with = "serialize_value_list")]
    attribute_value: String,
    comparison_operator: ComparisonOperator,
}

impl Condition {
    pub fn new<T: Into<String>>(value: T, comparison_operator: ComparisonOperator) -> Self {
        Self {
            attribute_value: value.into(),
            comparison_operator,
        }
    }
}

fn serialize_value_list<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq([AttributeValue::S(value.to_string())])
}

impl TryFrom<Condition> for types::Condition {
    type Error = anyhow::Error;

    fn try_from(value: Condition) -> anyhow::Result<types::Condition> {
        types::Condition::builder()
            .attribute_value_list(types::AttributeValue::S(value.attribute_value))
            .comparison_operator(value.comparison_operator.into())
            .build()
            .map_err(anyhow::Error::from)
    }
}

pub(crate) fn into_sdk_conditions(
    conditions: &Conditions,
) -> anyhow::Result<HashMap<String, types::Condition>> {
    conditions
        .iter()
        .map(|(name, condition)| {
            let condition = types::Condition::try_from(condition.clone())?;
            Ok::<_, anyhow::Error>((name.clone(), condition))
        })
        .collect()
}

/// Low-level scan or query request.
///
/// Serializes to the request document DynamoDB expects. Carries a single
/// attribute/value/operator triple under `ScanFilter` (scan) or
/// `KeyConditions` (query).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    #[serde(skip)]
    state: State,
    table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes_to_get: Option<Vec<String>>,
    limit: i32,
    select: Select,
    #[serde(skip_serializing_if = "Option::is_none")]
    scan_filter: Option<Conditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_conditions: Option<Conditions>,
    #[serde(skip)]
    exclusive_start_key: Option<Key>,
}

impl From<&Params> for SearchRequest {
    fn from(params: &Params) -> Self {
        let conditions = HashMap::from([(
            params.attribute.clone(),
            Condition::new(&params.attribute_value, params.comparison_operator),
        )]);
        let attributes_to_get = params.get_attribute.clone().map(|attr| vec![attr]);

        match params.state {
            State::Scan => Self {
                state: State::Scan,
                table_name: params.table_name.clone(),
                attributes_to_get: match params.select {
                    Select::AllAttributes => None,
                    _ => attributes_to_get,
                },
                limit: params.limit,
                select: params.select,
                scan_filter: Some(conditions),
                key_conditions: None,
                exclusive_start_key: None,
            },
            State::Query => Self {
                state: State::Query,
                table_name: params.table_name.clone(),
                attributes_to_get,
                limit: params.limit,
                select: params.select,
                scan_filter: None,
                key_conditions: Some(conditions),
                exclusive_start_key: None,
            },
        }
    }
}

impl SearchRequest {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }

    pub fn attributes_to_get(&self) -> Option<Vec<String>> {
        self.attributes_to_get.clone()
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn select(&self) -> Select {
        self.select
    }

    pub fn scan_filter(&self) -> Option<&Conditions> {
        self.scan_filter.as_ref()
    }

    pub fn key_conditions(&self) -> Option<&Conditions> {
        self.key_conditions.as_ref()
    }

    pub fn exclusive_start_key(&self) -> Option<Key> {
        self.exclusive_start_key.clone()
    }

    pub fn set_exclusive_start_key(&mut self, key: Key) {
        self.exclusive_start_key = Some(key);
    }
}
