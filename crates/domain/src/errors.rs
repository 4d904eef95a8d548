//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the client-credentials token exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthError {
    /// The token endpoint answered with a non-200 status.
    #[error("token request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The token endpoint answered 200 but the body is not a token.
    #[error("unparsable token response ({status}): {body}")]
    UnparsableToken { status: u16, body: String },

    /// No response from the token endpoint.
    #[error("token request failed: {message}")]
    Transport { message: String },
}

/// Failures of a paginated read. Any of these discards every page fetched so
/// far.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FetchError {
    /// A page request returned something other than 200.
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// A page body had no recognizable item array.
    #[error("unable to locate item array in page body: {reason}")]
    UnparsableBody { reason: String },

    /// A page request got no response.
    #[error("page request failed: {message}")]
    Transport { message: String },
}

/// Failures of a bulk create or update.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BulkError {
    /// Empty input, rejected before any request is sent.
    #[error("no list items were provided")]
    NoItems,

    /// At least one request failed below the HTTP layer. Supersedes any
    /// successes collected from sibling requests.
    #[error("bulk request failed: {message}")]
    Transport { message: String },

    /// Every request completed but the combined text carries a failure marker.
    #[error("bulk operation reported failure: {combined}")]
    ClassifiedFailure { combined: String },
}

/// Main error type for graphlist
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "error")]
pub enum GraphListError {
    /// Token exchange failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Paginated read failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Bulk write failed.
    #[error("Bulk error: {0}")]
    Bulk(#[from] BulkError),

    /// Missing or invalid configuration, including secrets.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied value cannot be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GraphListError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Fetch(FetchError::UpstreamStatus { .. }) => "fetch_status",
            Self::Fetch(FetchError::UnparsableBody { .. }) => "fetch_body",
            Self::Fetch(FetchError::Transport { .. }) => "fetch_transport",
            Self::Bulk(BulkError::NoItems) => "bulk_no_items",
            Self::Bulk(BulkError::Transport { .. }) => "bulk_transport",
            Self::Bulk(BulkError::ClassifiedFailure { .. }) => "bulk_classified",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Result type alias for graphlist operations
pub type Result<T> = std::result::Result<T, GraphListError>;
