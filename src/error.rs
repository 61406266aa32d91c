use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read: {path}. {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse module arguments: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Module arguments must be a mapping")]
    NotMapping,
    #[error("Unsupported parameters for (dynamodb_search) module: {}", .0.join(", "))]
    Unsupported(Vec<String>),
    #[error("missing or invalid arguments: {}", describe(.0))]
    Validation(#[from] ValidationErrors),
    #[error("cannot connect to AWS")]
    Connection(#[source] anyhow::Error),
    #[error("region must be specified")]
    NoRegion,
    #[error("Error: Table not found")]
    TableNotFound(String),
    #[error("Error: {0}")]
    Scan(#[source] anyhow::Error),
    #[error("Error: Can't execute query - {0}")]
    Query(#[source] anyhow::Error),
}

impl Error {
    /// Underlying failure with its whole chain of causes, if any.
    pub fn cause(&self) -> Option<String> {
        match self {
            Self::Read { source, .. } => Some(format!("{source:?}")),
            Self::Parse(err) => Some(format!("{err:?}")),
            Self::Connection(err) | Self::Scan(err) | Self::Query(err) => Some(format!("{err:?}")),
            _ => None,
        }
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = vec![];
    reduce(errors, "", &mut messages);
    messages.sort();
    messages.join(", ")
}

fn reduce(errors: &ValidationErrors, prefix: &str, acc: &mut Vec<String>) {
    for (key, val) in errors.errors() {
        match val {
            ValidationErrorsKind::Struct(e) => {
                let p = format!("{}{}.", prefix, key);
                reduce(e, &p, acc);
            }
            ValidationErrorsKind::List(m) => {
                for (n, e) in m {
                    let p = format!("{}{}[{}].", prefix, key, n);
                    reduce(e, &p, acc);
                }
            }
            ValidationErrorsKind::Field(e) => {
                let field = format!("{}{}", prefix, key);
                for err in e {
                    let message = if err.code == "required" {
                        "required".to_string()
                    } else {
                        match err.message.as_ref() {
                            Some(message) => message.to_string(),
                            None => "invalid value".to_string(),
                        }
                    };

                    // Struct level checks are reported under `__all__`.
                    if field.ends_with("__all__") {
                        acc.push(message);
                    } else {
                        acc.push(format!("{field}: {message}"));
                    }
                }
            }
        }
    }
}
