//! Shared helpers for `graphlist-infra` integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use graphlist_domain::{AccessToken, ClassificationMode, HttpConfig, ResourceLocator};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const SITE_ID: &str = "site-1";
pub const LIST_ID: &str = "list-1";
pub const ITEMS_PATH: &str = "/v1.0/sites/site-1/lists/list-1/items";

pub fn locator() -> ResourceLocator {
    ResourceLocator::new(SITE_ID, LIST_ID)
}

pub fn token() -> AccessToken {
    AccessToken {
        token_type: "Bearer".into(),
        expires_in: 3599,
        ext_expires_in: 3599,
        access_token: "test-token".into(),
    }
}

/// Endpoints pointed at a mock server.
pub fn http_config(server: &MockServer) -> HttpConfig {
    HttpConfig {
        graph_base_url: format!("{}/v1.0", server.uri()),
        login_base_url: server.uri(),
        timeout_secs: 5,
        classification: ClassificationMode::MarkerScan,
    }
}

pub fn items_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), ITEMS_PATH)
}

/// Serves `pages` in order, chaining them with `@odata.nextLink` cursors.
///
/// The cursor is carried in `$skiptoken`; the first request has none. When
/// `endless` is set, the last page still advertises another cursor.
pub struct PaginatedResponder {
    base_url: String,
    pages: Vec<Vec<&'static str>>,
    endless: bool,
}

impl PaginatedResponder {
    pub fn new(server: &MockServer, pages: Vec<Vec<&'static str>>) -> Self {
        Self { base_url: items_url(server), pages, endless: false }
    }

    pub fn endless(mut self) -> Self {
        self.endless = true;
        self
    }

    fn page_index(request: &Request) -> usize {
        request
            .url
            .query_pairs()
            .find(|(key, _)| key == "$skiptoken")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(0)
    }
}

impl Respond for PaginatedResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let index = Self::page_index(request);
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let has_next = self.endless || index + 1 < self.pages.len();

        let mut body = format!("{{\"@odata.context\":\"ctx\",\"value\":[{}]", items.join(","));
        if has_next {
            body.push_str(&format!(
                ",\"@odata.nextLink\":\"{}?$skiptoken={}\"",
                self.base_url,
                index + 1
            ));
        }
        body.push('}');

        ResponseTemplate::new(200).set_body_raw(body, "application/json")
    }
}

/// Echoes each request body back and records when it arrived.
#[derive(Clone)]
pub struct ArrivalRecorder {
    pub arrivals: Arc<Mutex<Vec<Instant>>>,
    status: u16,
    delay: Duration,
}

impl ArrivalRecorder {
    pub fn new(status: u16, delay: Duration) -> Self {
        Self { arrivals: Arc::default(), status, delay }
    }

    /// Time between the first and the last request arriving.
    pub fn arrival_spread(&self) -> Duration {
        let arrivals = self.arrivals.lock().unwrap();
        match (arrivals.iter().min(), arrivals.iter().max()) {
            (Some(first), Some(last)) => *last - *first,
            _ => Duration::ZERO,
        }
    }

    pub fn count(&self) -> usize {
        self.arrivals.lock().unwrap().len()
    }
}

impl Respond for ArrivalRecorder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.arrivals.lock().unwrap().push(Instant::now());
        ResponseTemplate::new(self.status)
            .set_body_raw(request.body.clone(), "application/json")
            .set_delay(self.delay)
    }
}
