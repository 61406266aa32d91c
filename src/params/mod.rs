mod coerce;

use crate::{
    config::ConnectionParams,
    types::{ComparisonOperator, Select, State},
    Error,
};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use validator::{Validate, ValidationError};

pub const DEFAULT_LIMIT: i32 = 10000;

const ANSIBLE_INTERNAL_PREFIX: &str = "_ansible_";

pub trait FromValidate {
    type Validatable: Validate + for<'de> Deserialize<'de>;

    fn from(value: Self::Validatable) -> Self;

    /// Keys the module does not know about.
    fn unsupported(_value: &Self::Validatable) -> Vec<String> {
        vec![]
    }
}

/// Deserializes and validates module arguments into `T`.
pub fn validated<T: FromValidate>(args: Mapping) -> Result<T, Error> {
    let raw: T::Validatable = serde_yaml::from_value(Value::Mapping(args))?;

    let unsupported = T::unsupported(&raw);
    if !unsupported.is_empty() {
        return Err(Error::Unsupported(unsupported));
    }

    raw.validate()?;
    Ok(<T as FromValidate>::from(raw))
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_get_attribute"))]
pub struct RawParams {
    #[validate(required)]
    state: Option<State>,
    #[validate(required, length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    #[serde(default, deserialize_with = "coerce::string")]
    table_name: Option<String>,
    #[validate(required, length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    #[serde(default, deserialize_with = "coerce::string")]
    attribute: Option<String>,
    #[validate(required)]
    #[serde(default, deserialize_with = "coerce::string")]
    attribute_value: Option<String>,
    comparisonoperator: Option<ComparisonOperator>,
    select: Option<Select>,
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    #[serde(default, deserialize_with = "coerce::string")]
    get_attribute: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    #[serde(default, deserialize_with = "coerce::int")]
    limit: Option<i32>,

    #[serde(
        default,
        alias = "aws_region",
        alias = "ec2_region",
        deserialize_with = "coerce::string"
    )]
    region: Option<String>,
    #[serde(
        default,
        alias = "ec2_url",
        alias = "aws_endpoint_url",
        deserialize_with = "coerce::string"
    )]
    endpoint_url: Option<String>,
    #[serde(
        default,
        alias = "ec2_access_key",
        alias = "access_key",
        deserialize_with = "coerce::string"
    )]
    aws_access_key: Option<String>,
    #[serde(
        default,
        alias = "ec2_secret_key",
        alias = "secret_key",
        deserialize_with = "coerce::string"
    )]
    aws_secret_key: Option<String>,
    #[serde(
        default,
        alias = "aws_security_token",
        alias = "session_token",
        deserialize_with = "coerce::string"
    )]
    security_token: Option<String>,
    #[serde(default, alias = "aws_profile", deserialize_with = "coerce::string")]
    profile: Option<String>,
    #[serde(default, deserialize_with = "coerce::boolean")]
    validate_certs: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

fn validate_get_attribute(params: &RawParams) -> Result<(), ValidationError> {
    let needs_attribute = params.state == Some(State::Query)
        || params.select.unwrap_or_default() != Select::AllAttributes;

    if needs_attribute && params.get_attribute.is_none() {
        let mut err = ValidationError::new("get_attribute");
        err.message = Some(
            "get_attribute is required when state is query or select is not ALL_ATTRIBUTES".into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validated module arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub state: State,
    pub table_name: String,
    pub attribute: String,
    pub attribute_value: String,
    pub comparison_operator: ComparisonOperator,
    pub select: Select,
    pub get_attribute: Option<String>,
    pub limit: i32,
    pub connection: ConnectionParams,
}

impl Params {
    pub fn from_args(args: Mapping) -> Result<Self, Error> {
        validated(args)
    }
}

impl FromValidate for Params {
    type Validatable = RawParams;

    fn from(p: RawParams) -> Params {
        Params {
            state: p.state.expect("`state` should be Some"),
            table_name: p.table_name.expect("`table_name` should be Some"),
            attribute: p.attribute.expect("`attribute` should be Some"),
            attribute_value: p.attribute_value.expect("`attribute_value` should be Some"),
            comparison_operator: p.comparisonoperator.unwrap_or_default(),
            select: p.select.unwrap_or_default(),
            get_attribute: p.get_attribute,
            limit: p.limit.unwrap_or(DEFAULT_LIMIT),
            connection: ConnectionParams {
                region: p.region,
                endpoint_url: p.endpoint_url,
                aws_access_key: p.aws_access_key,
                aws_secret_key: p.aws_secret_key,
                security_token: p.security_token,
                profile: p.profile,
                validate_certs: p.validate_certs,
            },
        }
    }

    fn unsupported(p: &RawParams) -> Vec<String> {
        let mut keys: Vec<String> = p
            .extra
            .keys()
            .filter(|key| !key.starts_with(ANSIBLE_INTERNAL_PREFIX))
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn it_applies_defaults() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: scan
            attribute: status
            attribute_value: PENDING
            "#,
        ));
        assert!(result.is_ok());

        let params = result.unwrap();
        assert_eq!(params.state, State::Scan);
        assert_eq!(params.table_name, "Orders");
        assert_eq!(params.comparison_operator, ComparisonOperator::Eq);
        assert_eq!(params.select, Select::AllAttributes);
        assert_eq!(params.get_attribute, None);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.connection, ConnectionParams::default());
    }

    #[test]
    fn it_reads_every_field_and_connection_aliases() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: query
            attribute: command_id
            attribute_value: 456
            comparisonoperator: BEGINS_WITH
            select: SPECIFIC_ATTRIBUTES
            get_attribute: state
            limit: "25"
            aws_region: eu-central-1
            ec2_url: http://localhost:8000
            access_key: AKIDEXAMPLE
            secret_key: secret
            aws_security_token: token
            aws_profile: ops
            validate_certs: no
            "#,
        ));
        assert!(result.is_ok());

        let params = result.unwrap();
        assert_eq!(params.state, State::Query);
        assert_eq!(params.attribute_value, "456");
        assert_eq!(params.comparison_operator, ComparisonOperator::BeginsWith);
        assert_eq!(params.select, Select::SpecificAttributes);
        assert_eq!(params.get_attribute, Some("state".into()));
        assert_eq!(params.limit, 25);
        assert_eq!(
            params.connection,
            ConnectionParams {
                region: Some("eu-central-1".into()),
                endpoint_url: Some("http://localhost:8000".into()),
                aws_access_key: Some("AKIDEXAMPLE".into()),
                aws_secret_key: Some("secret".into()),
                security_token: Some("token".into()),
                profile: Some("ops".into()),
                validate_certs: Some(false),
            }
        );
    }

    #[test]
    fn it_ignores_ansible_internal_keys() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: scan
            attribute: status
            attribute_value: PENDING
            _ansible_check_mode: false
            _ansible_module_name: dynamodb_search
            "#,
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn it_rejects_unknown_keys() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: scan
            attribute: status
            attribute_value: PENDING
            tablename: Typo
            color: blue
            "#,
        ));

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert!(matches!(err, Error::Unsupported(_)));
                assert_eq!(
                    format!("{err}"),
                    "Unsupported parameters for (dynamodb_search) module: color, tablename"
                );
            }
        }
    }

    #[test]
    fn it_requires_table_attribute_and_value() {
        let result = Params::from_args(args("state: scan"));

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert!(matches!(err, Error::Validation(_)));
                assert_eq!(
                    format!("{err}"),
                    "missing or invalid arguments: attribute: required, attribute_value: required, table_name: required"
                );
            }
        }
    }

    #[test]
    fn it_rejects_unsupported_state() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: present
            attribute: status
            attribute_value: PENDING
            "#,
        ));
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn it_rejects_unsupported_comparison_operator() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: scan
            attribute: status
            attribute_value: PENDING
            comparisonoperator: LIKE
            "#,
        ));
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn it_rejects_empty_table_name_and_zero_limit() {
        let result = Params::from_args(args(
            r#"
            table_name: ""
            state: scan
            attribute: status
            attribute_value: PENDING
            limit: 0
            "#,
        ));

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert_eq!(
                    format!("{err}"),
                    "missing or invalid arguments: limit: must be at least 1, table_name: must be 1 to 255 characters"
                );
            }
        }
    }

    #[test]
    fn it_requires_get_attribute_for_query() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: query
            attribute: order_id
            attribute_value: "1"
            "#,
        ));

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert_eq!(
                    format!("{err}"),
                    "missing or invalid arguments: get_attribute is required when state is query or select is not ALL_ATTRIBUTES"
                );
            }
        }
    }

    #[test]
    fn it_requires_get_attribute_for_partial_scan() {
        let result = Params::from_args(args(
            r#"
            table_name: Orders
            state: scan
            attribute: status
            attribute_value: PENDING
            select: COUNT
            "#,
        ));
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
