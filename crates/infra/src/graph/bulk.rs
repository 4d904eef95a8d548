//! Concurrent bulk writes
//!
//! Every item becomes its own spawned request over the session's shared
//! pool. The batch completes only once every request has produced an
//! outcome; a failed request never cancels its siblings.

use std::collections::BTreeMap;

use futures::stream::{FuturesUnordered, StreamExt};
use graphlist_core::ResultClassifier;
use graphlist_domain::{
    AggregateResult, BulkError, BulkReport, CreateItem, ItemKey, ItemOutcome, ResourceLocator,
    UpdateItem, WriteItem,
};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, info, instrument, warn};

use super::session::GraphSession;
use crate::errors::TransportErrorExt;
use crate::http::HttpClient;

type BulkResult<T> = std::result::Result<T, BulkError>;

struct WriteRequest {
    key: ItemKey,
    method: Method,
    url: String,
    body: String,
}

/// Issues one concurrent write per item against a list's items collection.
pub struct BulkMutator<'a> {
    session: &'a GraphSession,
    classifier: ResultClassifier,
}

impl<'a> BulkMutator<'a> {
    /// Bind the mutator to an open session and the classifier that judges its results.
    pub fn new(session: &'a GraphSession, classifier: ResultClassifier) -> Self {
        Self { session, classifier }
    }

    /// Create every item, then classify the combined response text.
    #[instrument(skip_all, fields(list_id = %locator.list_id, items = items.len()))]
    pub async fn execute<W: CreateItem>(
        &self,
        items: &[W],
        locator: &ResourceLocator,
    ) -> BulkResult<String> {
        let report = self.execute_detailed(items, locator).await?;
        self.conclude(report)
    }

    /// Create every item and return the per-item outcomes unclassified.
    pub async fn execute_detailed<W: CreateItem>(
        &self,
        items: &[W],
        locator: &ResourceLocator,
    ) -> BulkResult<BulkReport> {
        if items.is_empty() {
            return Err(BulkError::NoItems);
        }

        let url = self.session.items_url(locator);
        let requests = items.iter().enumerate().map(|(index, item)| WriteRequest {
            key: ItemKey::Index(index),
            method: Method::POST,
            url: url.clone(),
            body: item.json_body().to_string(),
        });

        Ok(self.run(requests).await)
    }

    /// Patch each item's fields, keyed by item id, then classify.
    #[instrument(skip_all, fields(list_id = %locator.list_id, items = updates.len()))]
    pub async fn execute_updates(
        &self,
        updates: &BTreeMap<String, String>,
        locator: &ResourceLocator,
    ) -> BulkResult<String> {
        let report = self.execute_updates_detailed(updates, locator).await?;
        self.conclude(report)
    }

    /// Patch each item's fields and return the per-item outcomes.
    pub async fn execute_updates_detailed(
        &self,
        updates: &BTreeMap<String, String>,
        locator: &ResourceLocator,
    ) -> BulkResult<BulkReport> {
        let pairs: Vec<(&str, &str)> =
            updates.iter().map(|(item_id, body)| (item_id.as_str(), body.as_str())).collect();
        self.patch_all(pairs.into_iter(), locator).await
    }

    /// Patch a batch of [`UpdateItem`]s, then classify.
    #[instrument(skip_all, fields(list_id = %locator.list_id, items = items.len()))]
    pub async fn execute_update_items(
        &self,
        items: &[UpdateItem],
        locator: &ResourceLocator,
    ) -> BulkResult<String> {
        let pairs = items.iter().map(|item| (item.item_id(), item.json_body()));
        let report = self.patch_all(pairs, locator).await?;
        self.conclude(report)
    }

    async fn patch_all<'i>(
        &self,
        pairs: impl Iterator<Item = (&'i str, &'i str)>,
        locator: &ResourceLocator,
    ) -> BulkResult<BulkReport> {
        let mut pairs = pairs.peekable();
        if pairs.peek().is_none() {
            return Err(BulkError::NoItems);
        }

        let root = self.session.items_url(locator);
        let requests = pairs.map(|(item_id, body)| WriteRequest {
            key: ItemKey::Id(item_id.to_string()),
            method: Method::PATCH,
            url: format!("{root}/{item_id}/fields"),
            body: body.to_string(),
        });

        Ok(self.run(requests).await)
    }

    async fn run(&self, requests: impl Iterator<Item = WriteRequest>) -> BulkReport {
        let mut pending = FuturesUnordered::new();

        for request in requests {
            let http = self.session.http().clone();
            let key = request.key.clone();
            let handle = tokio::spawn(send_write(http, request));
            pending.push(async move { (key, handle.await) });
        }

        debug!(in_flight = pending.len(), "bulk requests spawned");

        let mut outcomes = Vec::with_capacity(pending.len());
        while let Some((key, joined)) = pending.next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    warn!(%key, error = %join_err, "write task did not complete");
                    ItemOutcome::transport_failure(key, format!("task join error: {join_err}"))
                }
            };
            outcomes.push(outcome);
        }

        BulkReport::new(outcomes)
    }

    /// Collapse a report into the single-string contract.
    fn conclude(&self, report: BulkReport) -> BulkResult<String> {
        let failures: Vec<String> = report
            .transport_failures()
            .filter_map(|outcome| match &outcome.result {
                Err(message) => Some(format!("{}: {message}", outcome.key)),
                Ok(_) => None,
            })
            .collect();

        if !failures.is_empty() {
            warn!(failed = failures.len(), total = report.len(), "bulk operation had transport failures");
            return Err(BulkError::Transport { message: failures.join("; ") });
        }

        match self.classifier.classify_report(&report) {
            AggregateResult::Success(combined) => {
                info!(total = report.len(), "bulk operation succeeded");
                Ok(combined)
            }
            AggregateResult::Failure(combined) => {
                warn!(total = report.len(), mode = %self.classifier.mode(), "bulk operation classified as failed");
                Err(BulkError::ClassifiedFailure { combined })
            }
        }
    }
}

async fn send_write(http: HttpClient, request: WriteRequest) -> ItemOutcome {
    let WriteRequest { key, method, url, body } = request;

    let builder = http
        .request(method, &url)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body);

    let response = match http.send(builder).await {
        Ok(response) => response,
        Err(err) => return ItemOutcome::transport_failure(key, err.transport_message()),
    };

    let status = response.status().as_u16();
    match response.text().await {
        Ok(text) => ItemOutcome::response(key, status, text),
        Err(err) => ItemOutcome::transport_failure(key, err.transport_message()),
    }
}
