use aws_sdk_dynamodb::types;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Select {
    #[default]
    AllAttributes,
    AllProjectedAttributes,
    SpecificAttributes,
    Count,
}

impl From<Select> for types::Select {
    fn from(value: Select) -> types::Select {
        match value {
            Select::AllAttributes => types::Select::AllAttributes,
            Select::AllProjectedAttributes => types::Select::AllProjectedAttributes,
            Select::SpecificAttributes => types::Select::SpecificAttributes,
            Select::Count => types::Select::Count,
        }
    }
}
