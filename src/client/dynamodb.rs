use super::{Client, Page};
use crate::{
    config::Config,
    request::{into_sdk_conditions, SearchRequest},
    types::{into_item, Key},
    Error,
};

use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::{provider::ProvideCredentials, Credentials};
use aws_sdk_dynamodb::{
    config::{Builder as DbConfigBuilder, Region},
    error::{DisplayErrorContext, SdkError},
    operation::describe_table::DescribeTableError,
    Client as DbClient,
};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::Debug;
use tracing::{debug, warn};

const CREDENTIALS_SOURCE: &str = "module-params";

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    db_client: DbClient,
}

#[async_trait]
impl Client for DynamodbClient {
    async fn table_exists(&self, table_name: &str) -> Result<bool> {
        match self
            .db_client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => from_describe_table_err(err),
        }
    }

    async fn scan(&self, request: &SearchRequest) -> Result<Page> {
        let scan_filter = request.scan_filter().map(into_sdk_conditions).transpose()?;

        self.db_client
            .scan()
            .table_name(request.table_name())
            .limit(request.limit())
            .select(request.select().into())
            .set_attributes_to_get(request.attributes_to_get())
            .set_scan_filter(scan_filter)
            .set_exclusive_start_key(request.exclusive_start_key())
            .send()
            .await
            .map(|output| into_page(output.items, output.last_evaluated_key))
            .map_err(from_sdk_err)
    }

    async fn query(&self, request: &SearchRequest) -> Result<Page> {
        let key_conditions = request
            .key_conditions()
            .map(into_sdk_conditions)
            .transpose()?;

        self.db_client
            .query()
            .table_name(request.table_name())
            .limit(request.limit())
            .select(request.select().into())
            .set_attributes_to_get(request.attributes_to_get())
            .set_key_conditions(key_conditions)
            .set_exclusive_start_key(request.exclusive_start_key())
            .send()
            .await
            .map(|output| into_page(output.items, output.last_evaluated_key))
            .map_err(from_sdk_err)
    }
}

impl DynamodbClient {
    pub async fn builder(config: &Config) -> Result<DynamodbClientBuilder, Error> {
        DynamodbClientBuilder::new(config).await
    }
}

fn into_page(
    items: Option<Vec<HashMap<String, aws_sdk_dynamodb::types::AttributeValue>>>,
    last_evaluated_key: Option<Key>,
) -> Page {
    Page {
        items: items.unwrap_or_default().into_iter().map(into_item).collect(),
        last_evaluated_key: last_evaluated_key.filter(|key| !key.is_empty()),
    }
}

fn from_describe_table_err(err: SdkError<DescribeTableError>) -> Result<bool> {
    match err {
        SdkError::ServiceError(e) => {
            let e = e.into_err();
            match e {
                DescribeTableError::ResourceNotFoundException(_) => {
                    warn!("DescribeTable operation failed due to {e}");
                    Ok(false)
                }
                _ => Err(anyhow::Error::from(e)),
            }
        }
        _ => Err(from_sdk_err(err)),
    }
}

/// Keeps the service's own message. `SdkError` alone only displays its kind,
/// e.g. "service error".
fn from_sdk_err<E, R>(err: SdkError<E, R>) -> anyhow::Error
where
    E: StdError + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(e) => anyhow::Error::from(e.into_err()),
        _ => {
            let message = format!("{}", DisplayErrorContext(&err));
            anyhow::Error::from(err).context(message)
        }
    }
}

/// Fails unless the loaded config has a region and yields credentials.
async fn check_sdk_config(sdk_config: &SdkConfig) -> Result<(), Error> {
    match sdk_config.region() {
        Some(region) => debug!("Using region {region}"),
        None => return Err(Error::NoRegion),
    }

    sdk_config
        .credentials_provider()
        .ok_or_else(|| Error::Connection(anyhow::anyhow!("no credentials provider configured")))?
        .provide_credentials()
        .await
        .map_err(|err| Error::Connection(anyhow::Error::from(err)))?;

    Ok(())
}

#[derive(Debug)]
pub struct DynamodbClientBuilder {
    db_builder: DbConfigBuilder,
}

impl DynamodbClientBuilder {
    /// Loads the shared AWS config and checks that a region and credentials
    /// are available before any request is made.
    pub async fn new(config: &Config) -> Result<Self, Error> {
        let mut loader = aws_config::from_env();

        if let Some(region) = config.region() {
            loader = loader.region(Region::new(region.to_string()));
        }
        if let Some(profile) = config.profile() {
            loader = loader.profile_name(profile);
        }
        if let Some(creds) = config.credentials() {
            loader = loader.credentials_provider(Credentials::new(
                &creds.access_key,
                &creds.secret_key,
                creds.session_token.clone(),
                None,
                CREDENTIALS_SOURCE,
            ));
        }

        if !config.validate_certs() {
            warn!("validate_certs=false is ignored; TLS certificates are always verified");
        }

        let sdk_config = loader.load().await;
        check_sdk_config(&sdk_config).await?;

        Ok(Self {
            db_builder: DbConfigBuilder::from(&sdk_config),
        })
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => {
                debug!("Using endpoint {url}");
                Self {
                    db_builder: self.db_builder.endpoint_url(&url),
                }
            }
            None => self,
        }
    }

    pub fn build(self) -> DynamodbClient {
        let db_config = self.db_builder.build();
        let db_client = DbClient::from_conf(db_config);

        DynamodbClient { db_client }
    }
}
