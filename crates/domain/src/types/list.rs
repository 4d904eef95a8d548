//! List addressing, read configuration and read results

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_LIMIT, FRAGMENT_SEPARATOR};

/// Identifies a remote list. Immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLocator {
    /// Graph site id.
    pub site_id: String,
    /// List id within the site.
    pub list_id: String,
}

impl ResourceLocator {
    /// Locate `list_id` inside `site_id`.
    pub fn new(site_id: impl Into<String>, list_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), list_id: list_id.into() }
    }

    /// Collection root relative to the Graph base URL.
    pub fn items_path(&self) -> String {
        format!("sites/{}/lists/{}/items", self.site_id, self.list_id)
    }
}

/// Configuration for a single paginated read.
///
/// `page_limit` bounds the number of page requests, not the number of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Item fields to expand, as `expand=fields(select=..)`.
    pub item_field_filter: Option<Vec<String>>,
    /// Top-level properties to keep, as `select=..`.
    pub response_field_filter: Option<Vec<String>>,
    /// Maximum number of page requests.
    pub page_limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { item_field_filter: None, response_field_filter: None, page_limit: DEFAULT_PAGE_LIMIT }
    }
}

impl PageQuery {
    /// Select these fields inside each item's `fields` expansion.
    pub fn with_item_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_field_filter = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Select these top-level properties on each item.
    pub fn with_response_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_field_filter = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Bound the number of page requests.
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Page limit actually honoured; zero is treated as one.
    pub fn effective_page_limit(&self) -> u32 {
        self.page_limit.max(1)
    }
}

/// Items of every fetched page, in page-arrival order, wrapped in one JSON
/// array. Each page's items keep their exact upstream text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedCollection {
    text: String,
    page_count: usize,
}

impl AggregatedCollection {
    /// Join raw page fragments (array contents without brackets).
    ///
    /// Empty fragments are skipped so that empty pages never produce a
    /// dangling separator.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::from("[");
        let mut page_count = 0;
        let mut wrote_any = false;

        for fragment in fragments {
            page_count += 1;
            let fragment = fragment.as_ref();
            if fragment.is_empty() {
                continue;
            }
            if wrote_any {
                text.push_str(FRAGMENT_SEPARATOR);
            }
            text.push_str(fragment);
            wrote_any = true;
        }

        text.push(']');
        Self { text, page_count }
    }

    /// The aggregated JSON array text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the aggregated JSON array text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of pages that went into this collection.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Decode the collection into typed items.
    pub fn items<T: DeserializeOwned>(&self) -> serde_json::Result<Vec<T>> {
        serde_json::from_str(&self.text)
    }
}

impl fmt::Display for AggregatedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
