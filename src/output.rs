use super::{types::Item, Error};

use serde::Serialize;
use tracing::error;

/// Document printed on stdout for Ansible to pick up.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ModuleResult {
    Success {
        changed: bool,
        item: Vec<Item>,
    },
    Failure {
        failed: bool,
        msg: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        exception: Option<String>,
    },
}

impl ModuleResult {
    pub fn success(item: Vec<Item>) -> Self {
        Self::Success {
            changed: false,
            item,
        }
    }

    pub fn failure(err: &Error) -> Self {
        Self::Failure {
            failed: true,
            msg: format!("{err}"),
            exception: err.cause(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_failed() {
            1
        } else {
            0
        }
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                error!("{:#?}", err);
                serde_json::json!({
                    "failed": true,
                    "msg": format!("Failed to serialize module result: {err}"),
                })
                .to_string()
            }
        }
    }
}

impl From<Result<Vec<Item>, Error>> for ModuleResult {
    fn from(result: Result<Vec<Item>, Error>) -> Self {
        match result {
            Ok(items) => Self::success(items),
            Err(err) => Self::failure(&err),
        }
    }
}
