//! Shared test helpers for `graphlist-core` integration tests.
//!
//! Lightweight in-memory implementations of the list ports so service tests
//! can focus on behaviour instead of HTTP plumbing.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use graphlist_core::{ListReader, ListWriter, SecretSource, TokenProvider};
use graphlist_domain::{
    AccessToken, AggregatedCollection, AuthError, CredentialProfile, Credentials,
    GraphListError, NewItem, PageQuery, ResourceLocator, Result as DomainResult, WriteItem,
};

pub fn profile() -> CredentialProfile {
    CredentialProfile {
        client_id: "client-id".into(),
        tenant_id: "tenant-id".into(),
        scope: "https://graph.microsoft.com/.default".into(),
        secret_name: "SP_CLIENT_SECRET".into(),
    }
}

pub fn token(value: &str) -> AccessToken {
    AccessToken {
        token_type: "Bearer".into(),
        expires_in: 3599,
        ext_expires_in: 3599,
        access_token: value.into(),
    }
}

/// Secret source backed by a map.
#[derive(Default)]
pub struct MapSecretSource {
    secrets: HashMap<String, String>,
}

impl MapSecretSource {
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

impl SecretSource for MapSecretSource {
    fn get_secret(&self, name: &str) -> DomainResult<String> {
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| GraphListError::Config(format!("secret not found: {name}")))
    }
}

/// Token provider that records every credential set it was handed.
#[derive(Default, Clone)]
pub struct RecordingTokenProvider {
    pub seen: Arc<Mutex<Vec<Credentials>>>,
    pub reject: bool,
}

#[async_trait]
impl TokenProvider for RecordingTokenProvider {
    async fn acquire_token(&self, credentials: &Credentials) -> DomainResult<AccessToken> {
        self.seen.lock().unwrap().push(credentials.clone());
        if self.reject {
            return Err(AuthError::Rejected { status: 401, body: "invalid_client".into() }.into());
        }
        Ok(token(&format!("token-for-{}", credentials.client_id)))
    }
}

/// Reader returning a fixed collection and recording the query it got.
#[derive(Clone)]
pub struct StaticReader {
    pub collection: AggregatedCollection,
    pub calls: Arc<Mutex<Vec<(String, ResourceLocator, PageQuery)>>>,
}

impl StaticReader {
    pub fn new(fragments: &[&str]) -> Self {
        Self {
            collection: AggregatedCollection::from_fragments(fragments.iter().copied()),
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl ListReader for StaticReader {
    async fn fetch_all(
        &self,
        token: &AccessToken,
        locator: &ResourceLocator,
        query: &PageQuery,
    ) -> DomainResult<AggregatedCollection> {
        self.calls.lock().unwrap().push((
            token.access_token.clone(),
            locator.clone(),
            query.clone(),
        ));
        Ok(self.collection.clone())
    }
}

/// Writer echoing bodies back, joined the way the real writer joins them.
#[derive(Default, Clone)]
pub struct EchoWriter {
    pub created: Arc<Mutex<Vec<String>>>,
    pub updated: Arc<Mutex<BTreeMap<String, String>>>,
}

#[async_trait]
impl ListWriter for EchoWriter {
    async fn create_items(
        &self,
        _token: &AccessToken,
        _locator: &ResourceLocator,
        items: &[NewItem],
    ) -> DomainResult<String> {
        let bodies: Vec<String> = items.iter().map(|item| item.json_body().to_string()).collect();
        self.created.lock().unwrap().extend(bodies.iter().cloned());
        Ok(bodies.join(", "))
    }

    async fn update_items(
        &self,
        _token: &AccessToken,
        _locator: &ResourceLocator,
        updates: &BTreeMap<String, String>,
    ) -> DomainResult<String> {
        self.updated.lock().unwrap().extend(updates.clone());
        Ok(updates.values().cloned().collect::<Vec<_>>().join(", "))
    }
}
