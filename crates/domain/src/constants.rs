//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! workspace.

// Remote endpoints
/// Graph v1.0 API root.
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
/// Identity platform authority root.
pub const DEFAULT_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";
/// Application permissions scope for Graph.
pub const DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

// Pagination
/// Pages followed by a read unless configured otherwise.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
/// Page key holding the item array.
pub const VALUE_KEY: &str = "value";
/// Page key holding the next cursor.
pub const NEXT_LINK_KEY: &str = "@odata.nextLink";

// HTTP
/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("graphlist/", env!("CARGO_PKG_VERSION"));
/// Joins page fragments and bulk response bodies.
pub const FRAGMENT_SEPARATOR: &str = ", ";

// Aggregate classification markers, matched as plain substrings
/// Substrings that fail a batch under marker scanning.
pub const FAILURE_MARKERS: [&str; 3] = ["BadRequest", "InternalServerError", "Invalid request"];
