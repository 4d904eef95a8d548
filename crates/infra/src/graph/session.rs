//! Per-call Graph session
//!
//! A session owns one connection pool with the bearer token baked into its
//! default headers. It is opened for a single top-level call and dropped when
//! that call returns; sessions are never shared between calls.

use std::time::Duration;

use graphlist_domain::constants::USER_AGENT;
use graphlist_domain::{AccessToken, GraphListError, HttpConfig, ResourceLocator, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::http::HttpClient;

/// Authenticated connection pool rooted at the configured Graph base URL.
pub struct GraphSession {
    http: HttpClient,
    graph_base: Url,
}

impl GraphSession {
    /// Open a session authenticated with `token`.
    pub fn open(config: &HttpConfig, token: &AccessToken) -> Result<Self> {
        let graph_base = parse_base_url(&config.graph_base_url)?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.bearer()))
            .map_err(|_| GraphListError::InvalidInput("access token is not a valid header value".into()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, graph_base })
    }

    /// Client shared by every request of this session.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Absolute URL of a list's item collection, without a query.
    pub fn items_url(&self, locator: &ResourceLocator) -> String {
        format!("{}/{}", self.graph_base.as_str().trim_end_matches('/'), locator.items_path())
    }
}

/// Validate a configured base URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|err| GraphListError::Config(format!("invalid base URL '{raw}': {err}")))
}
