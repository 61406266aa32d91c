mod dynamodb;
#[cfg(test)]
mod mock;

use crate::request::SearchRequest;
use crate::types::{Item, Key};

use anyhow::Result;
use async_trait::async_trait;

/// One page of a scan or query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Key>,
}

#[async_trait]
pub trait Client: Send + Sync {
    /// `Ok(false)` only when the store says the table does not exist.
    async fn table_exists(&self, table_name: &str) -> Result<bool>;
    async fn scan(&self, request: &SearchRequest) -> Result<Page>;
    async fn query(&self, request: &SearchRequest) -> Result<Page>;
}

pub use dynamodb::{DynamodbClient, DynamodbClientBuilder};
#[cfg(test)]
pub use mock::{page_key, Call, MockClient, PageSource};
