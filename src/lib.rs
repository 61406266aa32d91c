pub mod client;
pub mod config;
mod error;
mod output;
pub mod params;
pub mod request;
mod search;
pub mod types;

use client::DynamodbClient;
use config::Config;
use params::Params;
use request::SearchRequest;
use std::path::Path;
use tracing::info;
use types::Item;

pub use error::Error;
pub use output::ModuleResult;
pub use search::search;

/// Reads the module arguments, connects to DynamoDB and runs the scan or query.
pub async fn run<P: AsRef<Path>>(args_path: Option<P>) -> Result<Vec<Item>, Error> {
    let args = config::read_args(args_path)?;
    let params = Params::from_args(args)?;
    let config = Config::new(&params.connection);

    let client = DynamodbClient::builder(&config)
        .await?
        .endpoint_url(config.endpoint_url())
        .build();

    let request = SearchRequest::from(&params);
    info!("{} on table {}", request.state(), request.table_name());

    search(&client, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn it_fails_when_args_file_is_missing() {
        let result = run(Some("src/config/test/non-exist.json")).await;

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert!(matches!(err, Error::Read { .. }));
            }
        }
    }

    #[tokio::test]
    async fn it_fails_when_args_are_not_a_mapping() {
        let result = run(Some("src/config/test/list.yml")).await;
        assert!(matches!(result, Err(Error::NotMapping)));
    }

    #[tokio::test]
    async fn it_rejects_unknown_args_before_connecting() {
        let result = run(Some("src/config/test/unsupported.yml")).await;

        match result {
            Ok(_) => {
                unreachable!("The result shoud be an error");
            }
            Err(err) => {
                assert_eq!(
                    format!("{err}"),
                    "Unsupported parameters for (dynamodb_search) module: tablename"
                );
            }
        }
    }

    #[tokio::test]
    async fn it_reports_invalid_args_as_failed_result() {
        let result = ModuleResult::from(run(Some("src/config/test/incomplete.json")).await);

        assert!(result.is_failed());
        assert_eq!(result.exit_code(), 1);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "failed": true,
                "msg": "missing or invalid arguments: get_attribute is required when state is query or select is not ALL_ATTRIBUTES"
            })
        );
    }
}
