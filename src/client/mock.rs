use super::{Client, Page};
use crate::request::SearchRequest;
use crate::types::{Item, Key, State};

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A scan or query call the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub state: State,
    pub exclusive_start_key: Option<Key>,
}

#[derive(Debug, Clone)]
pub struct MockClient {
    table_name: String,
    describe_error: Option<String>,
    fail_on_call: Option<usize>,
    source: Arc<Mutex<PageSource>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockClient {
    pub fn new(table_name: &str, source: PageSource) -> Self {
        Self {
            table_name: table_name.into(),
            describe_error: None,
            fail_on_call: None,
            source: Arc::new(Mutex::new(source)),
            calls: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Makes the existence check fail with something other than "not found".
    pub fn describe_error(self, message: &str) -> Self {
        Self {
            describe_error: Some(message.into()),
            ..self
        }
    }

    /// Makes the n-th (0-indexed) scan or query call fail.
    pub fn fail_on_call(self, n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            ..self
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next_page(&self, state: State, request: &SearchRequest) -> Result<Page> {
        assert_eq!(self.table_name.as_str(), request.table_name());

        let mut calls = self.calls.lock().unwrap();
        let n = calls.len();
        calls.push(Call {
            state,
            exclusive_start_key: request.exclusive_start_key(),
        });

        if self.fail_on_call == Some(n) {
            return Err(anyhow::anyhow!("ProvisionedThroughputExceededException"));
        }

        let mut source = self.source.lock().unwrap();
        Ok(source.next().unwrap_or_default())
    }
}

#[async_trait]
impl Client for MockClient {
    async fn table_exists(&self, table_name: &str) -> Result<bool> {
        match self.describe_error.as_ref() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.table_name.as_str() == table_name),
        }
    }

    async fn scan(&self, request: &SearchRequest) -> Result<Page> {
        self.next_page(State::Scan, request)
    }

    async fn query(&self, request: &SearchRequest) -> Result<Page> {
        self.next_page(State::Query, request)
    }
}

/// Pages served in order. Every page but the last points at the next one
/// through `LastEvaluatedKey`.
#[derive(Debug, Default)]
pub struct PageSource {
    source: Option<Vec<Vec<Item>>>,
    served: usize,
}

impl Iterator for PageSource {
    type Item = Page;

    fn next(&mut self) -> Option<Self::Item> {
        let mut source = self.source.take().unwrap_or_default().into_iter();
        let items = source.next();
        let rest: Vec<Vec<Item>> = source.collect();

        self.served += 1;
        let last_evaluated_key = if rest.is_empty() {
            None
        } else {
            Some(page_key(self.served))
        };
        self.source = Some(rest);

        items.map(|items| Page {
            items,
            last_evaluated_key,
        })
    }
}

impl PageSource {
    pub fn new() -> Self {
        Self {
            source: Some(vec![]),
            served: 0,
        }
    }

    pub fn push<T: IntoIterator<Item = Item>>(&mut self, items: T) {
        match self.source.as_mut() {
            Some(source) => {
                source.push(items.into_iter().collect());
            }
            None => {
                self.source = Some(vec![items.into_iter().collect()]);
            }
        }
    }
}

/// Continuation token the mock hands out after its n-th page.
pub fn page_key(n: usize) -> Key {
    HashMap::from([("id".to_string(), AttributeValue::S(format!("key-{n}")))])
}

#[test]
fn page_source_implements_iterator_trait() {
    use crate::types;

    let item = |id: &str| -> Item {
        HashMap::from([("id".to_string(), types::AttributeValue::S(id.into()))])
    };

    let mut source = PageSource::new();
    source.push([item("a"), item("b")]);
    source.push([item("c")]);

    let opt = source.next();
    assert!(opt.is_some());
    let page = opt.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.last_evaluated_key, Some(page_key(1)));

    let opt = source.next();
    assert!(opt.is_some());
    let page = opt.unwrap();
    assert_eq!(page.items, vec![item("c")]);
    assert!(page.last_evaluated_key.is_none());

    let opt = source.next();
    assert!(opt.is_none());
}
