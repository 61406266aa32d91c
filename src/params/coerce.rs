//! Scalar coercions matching how Ansible treats `str`, `int` and `bool` options.

use serde::{de, Deserialize, Deserializer};
use serde_yaml::Value;

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, found {other:?}"
        ))),
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("{n} is not a valid integer"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("`{s}` is not a valid integer"))),
        Some(other) => Err(de::Error::custom(format!(
            "expected an integer, found {other:?}"
        ))),
    }
}

pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(1) => Ok(Some(true)),
            Some(0) => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("{n} is not a valid boolean"))),
        },
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "yes" | "on" | "true" | "y" | "t" | "1" => Ok(Some(true)),
            "no" | "off" | "false" | "n" | "f" | "0" => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("`{s}` is not a valid boolean"))),
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected a boolean, found {other:?}"
        ))),
    }
}
