//! Paginated list reads
//!
//! Each page is parsed into raw JSON values so the item array can be carried
//! through byte-for-byte while the continuation cursor is read as a string.
//! Key lookup for both is ASCII case-insensitive.

use std::collections::HashMap;

use graphlist_domain::constants::{NEXT_LINK_KEY, VALUE_KEY};
use graphlist_domain::{AggregatedCollection, FetchError, PageQuery, ResourceLocator};
use reqwest::{Method, StatusCode};
use serde_json::value::RawValue;
use tracing::{debug, info, instrument, warn};

use super::session::GraphSession;
use crate::errors::TransportErrorExt;

type FetchResult<T> = std::result::Result<T, FetchError>;

/// One fetched page: the item array's contents and the cursor, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawPage {
    pub item_fragment: String,
    pub next_cursor: Option<String>,
}

/// Follows `@odata.nextLink` cursors over a session.
pub struct PageFetcher<'a> {
    session: &'a GraphSession,
}

impl<'a> PageFetcher<'a> {
    /// Read through `session`.
    pub fn new(session: &'a GraphSession) -> Self {
        Self { session }
    }

    /// Fetch every page of a list, up to the query's page limit.
    ///
    /// Reaching the limit with a cursor still pending is not an error; the
    /// pages fetched so far are returned. Any failed page discards the rest.
    #[instrument(skip(self, locator, query), fields(site_id = %locator.site_id, list_id = %locator.list_id))]
    pub async fn fetch_all(
        &self,
        locator: &ResourceLocator,
        query: &PageQuery,
    ) -> FetchResult<AggregatedCollection> {
        let page_limit = query.effective_page_limit();
        let mut next = Some(initial_url(&self.session.items_url(locator), query));
        let mut fragments = Vec::new();
        let mut pages: u32 = 0;

        while let Some(url) = next.take() {
            if pages == page_limit {
                warn!(truncated = true, page_limit, "page limit reached with a cursor pending");
                break;
            }

            let page = self.fetch_page(&url).await?;
            pages += 1;
            debug!(page = pages, has_next = page.next_cursor.is_some(), "page fetched");

            fragments.push(page.item_fragment);
            next = page.next_cursor;
        }

        let collection = AggregatedCollection::from_fragments(fragments);
        info!(pages = collection.page_count(), "pagination complete");
        Ok(collection)
    }

    async fn fetch_page(&self, url: &str) -> FetchResult<RawPage> {
        let http = self.session.http();
        let response = http
            .send(http.request(Method::GET, url))
            .await
            .map_err(TransportErrorExt::into_fetch_error)?;

        let status = response.status();
        let body = response.text().await.map_err(TransportErrorExt::into_fetch_error)?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "page request returned a non-OK status");
            return Err(FetchError::UpstreamStatus { status: status.as_u16(), body });
        }

        parse_page(&body)
    }
}

/// First page URL: `expand` for item fields, `select` for top-level fields.
pub(crate) fn initial_url(items_url: &str, query: &PageQuery) -> String {
    let mut url = items_url.to_string();
    let mut separator = '?';

    if let Some(fields) = &query.item_field_filter {
        url.push(separator);
        url.push_str("expand=fields(select=");
        url.push_str(&fields.join(","));
        url.push(')');
        separator = '&';
    }

    if let Some(fields) = &query.response_field_filter {
        url.push(separator);
        url.push_str("select=");
        url.push_str(&fields.join(","));
    }

    url
}

pub(crate) fn parse_page(body: &str) -> FetchResult<RawPage> {
    let members: HashMap<String, &RawValue> = serde_json::from_str(body)
        .map_err(|err| FetchError::UnparsableBody { reason: err.to_string() })?;

    let value = lookup(&members, VALUE_KEY).ok_or_else(|| FetchError::UnparsableBody {
        reason: format!("no '{VALUE_KEY}' member"),
    })?;

    let item_fragment = array_contents(value.get())
        .ok_or_else(|| FetchError::UnparsableBody { reason: format!("'{VALUE_KEY}' is not an array") })?
        .to_string();

    let next_cursor = lookup(&members, NEXT_LINK_KEY)
        .and_then(|raw| serde_json::from_str::<String>(raw.get()).ok())
        .filter(|link| !link.is_empty());

    Ok(RawPage { item_fragment, next_cursor })
}

/// Exact key first, then the first ASCII case-insensitive match.
fn lookup<'b>(members: &HashMap<String, &'b RawValue>, key: &str) -> Option<&'b RawValue> {
    members.get(key).copied().or_else(|| {
        members
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, raw)| *raw)
    })
}

/// Text between an array's brackets, trimmed.
fn array_contents(raw: &str) -> Option<&str> {
    raw.trim().strip_prefix('[')?.strip_suffix(']').map(str::trim)
}
