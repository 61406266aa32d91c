use serde::{Deserialize, Serialize};
use std::fmt;

/// Read operation the module performs.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Scan,
    Query,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Query => write!(f, "query"),
        }
    }
}
