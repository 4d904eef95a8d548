//! Port interfaces for list access
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use std::collections::BTreeMap;

use async_trait::async_trait;
use graphlist_domain::{
    AccessToken, AggregatedCollection, Credentials, NewItem, PageQuery, ResourceLocator, Result,
};

/// Trait for exchanging client credentials for a bearer token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Acquire a new access token. Nothing is cached or refreshed.
    async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken>;
}

/// Trait for paginated list reads
#[async_trait]
pub trait ListReader: Send + Sync {
    /// Fetch every page (up to the query's page limit) as one collection
    async fn fetch_all(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        query: &PageQuery,
    ) -> Result<AggregatedCollection>;
}

/// Trait for concurrent bulk list writes
#[async_trait]
pub trait ListWriter: Send + Sync {
    /// Create every item; returns the combined response text
    async fn create_items(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        items: &[NewItem],
    ) -> Result<String>;

    /// Patch the fields of every item id; returns the combined response text
    async fn update_items(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        updates: &BTreeMap<String, String>,
    ) -> Result<String>;
}
