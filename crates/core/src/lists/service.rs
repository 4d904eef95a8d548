//! List sync service - core business logic

use std::collections::BTreeMap;
use std::sync::Arc;

use graphlist_domain::{
    find_lookup_id, AccessToken, AggregatedCollection, CredentialProfile, FetchError, NewItem,
    PageQuery, ResourceLocator, Result, UserLookupItem,
};
use tracing::{debug, info, instrument, warn};

use super::ports::{ListReader, ListWriter, TokenProvider};
use crate::secret_ports::SecretSource;

/// Field holding a user's e-mail in the user information list.
const LOOKUP_EMAIL_FIELD: &str = "EMail";

/// Composes secret lookup, token exchange and list access.
///
/// Every call acquires a fresh token; tokens are never cached here.
pub struct ListSyncService {
    secrets: Arc<dyn SecretSource>,
    tokens: Arc<dyn TokenProvider>,
    reader: Arc<dyn ListReader>,
    writer: Arc<dyn ListWriter>,
}

impl ListSyncService {
    /// Create a new list sync service
    pub fn new(
        secrets: Arc<dyn SecretSource>,
        tokens: Arc<dyn TokenProvider>,
        reader: Arc<dyn ListReader>,
        writer: Arc<dyn ListWriter>,
    ) -> Self {
        Self { secrets, tokens, reader, writer }
    }

    /// Resolve the profile's secret and exchange it for a token
    #[instrument(skip(self, profile), fields(client_id = %profile.client_id, tenant_id = %profile.tenant_id))]
    pub async fn authenticate(&self, profile: &CredentialProfile) -> Result<AccessToken> {
        let secret = self.secrets.get_secret(&profile.secret_name)?;
        let credentials = profile.with_secret(secret);
        let token = self.tokens.acquire_token(&credentials).await?;
        debug!(expires_in = token.expires_in, "access token acquired");
        Ok(token)
    }

    /// Read every page of a list
    pub async fn read_all(
        &self,
        profile: &CredentialProfile,
        locator: &ResourceLocator,
        query: &PageQuery,
    ) -> Result<AggregatedCollection> {
        let token = self.authenticate(profile).await?;
        let collection = self.reader.fetch_all(&token, locator, query).await?;
        info!(pages = collection.page_count(), list_id = %locator.list_id, "list read complete");
        Ok(collection)
    }

    /// Create list items concurrently
    pub async fn create(
        &self,
        profile: &CredentialProfile,
        locator: &ResourceLocator,
        items: &[NewItem],
    ) -> Result<String> {
        let token = self.authenticate(profile).await?;
        self.writer.create_items(&token, locator, items).await
    }

    /// Patch list item fields concurrently, keyed by item id
    pub async fn update(
        &self,
        profile: &CredentialProfile,
        locator: &ResourceLocator,
        updates: &BTreeMap<String, String>,
    ) -> Result<String> {
        let token = self.authenticate(profile).await?;
        self.writer.update_items(&token, locator, updates).await
    }

    /// Find the user information list id for an e-mail address
    ///
    /// `user_list` must point at the site's user information list. Returns
    /// `None` when no row carries the address.
    #[instrument(skip_all)]
    pub async fn resolve_user_lookup_id(
        &self,
        profile: &CredentialProfile,
        user_list: &ResourceLocator,
        email: &str,
    ) -> Result<Option<String>> {
        let query = PageQuery::default().with_item_fields([LOOKUP_EMAIL_FIELD]);
        let collection = self.read_all(profile, user_list, &query).await?;

        let rows: Vec<UserLookupItem> = collection
            .items()
            .map_err(|err| FetchError::UnparsableBody { reason: err.to_string() })?;

        let found = find_lookup_id(&rows, email).map(str::to_owned);
        if found.is_none() {
            warn!(rows = rows.len(), "no user lookup row matched");
        }
        Ok(found)
    }
}
