//! Graph-backed implementations of the list ports

use std::collections::BTreeMap;

use async_trait::async_trait;
use graphlist_core::{ListReader, ListWriter, ResultClassifier, TokenProvider};
use graphlist_domain::{
    AccessToken, AggregatedCollection, Credentials, GraphListConfig, HttpConfig, NewItem,
    PageQuery, ResourceLocator, Result,
};

use super::auth::TokenClient;
use super::bulk::BulkMutator;
use super::pages::PageFetcher;
use super::session::GraphSession;

/// Façade over token exchange, reads and bulk writes.
///
/// Each call opens its own [`GraphSession`]; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct GraphListClient {
    http: HttpConfig,
    classifier: ResultClassifier,
}

impl GraphListClient {
    /// Client for the endpoints in `http`, classifying with its configured mode.
    pub fn new(http: HttpConfig) -> Self {
        let classifier = ResultClassifier::new(http.classification);
        Self { http, classifier }
    }

    /// Client built from a loaded configuration.
    pub fn from_config(config: &GraphListConfig) -> Self {
        Self::new(config.http.clone())
    }

    /// Classifier applied to bulk results.
    pub fn classifier(&self) -> ResultClassifier {
        self.classifier
    }
}

#[async_trait]
impl TokenProvider for GraphListClient {
    async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let client = TokenClient::from_config(&self.http)?;
        Ok(client.acquire_token(credentials).await?)
    }
}

#[async_trait]
impl ListReader for GraphListClient {
    async fn fetch_all(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        query: &PageQuery,
    ) -> Result<AggregatedCollection> {
        let session = GraphSession::open(&self.http, token)?;
        Ok(PageFetcher::new(&session).fetch_all(locator, query).await?)
    }
}

#[async_trait]
impl ListWriter for GraphListClient {
    async fn create_items(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        items: &[NewItem],
    ) -> Result<String> {
        let session = GraphSession::open(&self.http, token)?;
        Ok(BulkMutator::new(&session, self.classifier).execute(items, locator).await?)
    }

    async fn update_items(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        updates: &BTreeMap<String, String>,
    ) -> Result<String> {
        let session = GraphSession::open(&self.http, token)?;
        Ok(BulkMutator::new(&session, self.classifier).execute_updates(updates, locator).await?)
    }
}
