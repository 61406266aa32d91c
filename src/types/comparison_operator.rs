use aws_sdk_dynamodb::types;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonOperator {
    #[default]
    Eq,
    Ne,
    In,
    Le,
    Lt,
    Ge,
    Gt,
    Between,
    NotNull,
    Null,
    Contains,
    NotContains,
    BeginsWith,
}

impl From<ComparisonOperator> for types::ComparisonOperator {
    fn from(value: ComparisonOperator) -> types::ComparisonOperator {
        match value {
            ComparisonOperator::Eq => types::ComparisonOperator::Eq,
            ComparisonOperator::Ne => types::ComparisonOperator::Ne,
            ComparisonOperator::In => types::ComparisonOperator::In,
            ComparisonOperator::Le => types::ComparisonOperator::Le,
            ComparisonOperator::Lt => types::ComparisonOperator::Lt,
            ComparisonOperator::Ge => types::ComparisonOperator::Ge,
            ComparisonOperator::Gt => types::ComparisonOperator::Gt,
            ComparisonOperator::Between => types::ComparisonOperator::Between,
            ComparisonOperator::NotNull => types::ComparisonOperator::NotNull,
            ComparisonOperator::Null => types::ComparisonOperator::Null,
            ComparisonOperator::Contains => types::ComparisonOperator::Contains,
            ComparisonOperator::NotContains => types::ComparisonOperator::NotContains,
            ComparisonOperator::BeginsWith => types::ComparisonOperator::BeginsWith,
        }
    }
}
