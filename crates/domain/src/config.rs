//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GRAPH_BASE_URL, DEFAULT_LOGIN_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_SCOPE,
    DEFAULT_TIMEOUT_SECS,
};
use crate::impl_string_conversions;
use crate::types::{CredentialProfile, ResourceLocator};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphListConfig {
    /// Identity used to obtain tokens.
    pub auth: AuthConfig,
    /// The list every call targets.
    pub list: ListConfig,
    /// Endpoints, timeouts and result classification.
    #[serde(default)]
    pub http: HttpConfig,
}

/// App registration used for the client-credentials exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Directory (tenant) the app is registered in.
    pub tenant_id: String,
    /// Application (client) id.
    pub client_id: String,
    /// Name handed to the secret source; never the secret itself.
    pub client_secret_name: String,
    /// OAuth scope requested for the token.
    #[serde(default = "default_scope")]
    pub scope: String,
}

/// Target list and read defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Graph site id.
    pub site_id: String,
    /// List id or display name within the site.
    pub list_id: String,
    /// Maximum number of pages a read follows.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

/// Endpoints and transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Graph API root, including the version segment.
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
    /// Identity platform authority root.
    #[serde(default = "default_login_base_url")]
    pub login_base_url: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How bulk results are judged.
    #[serde(default)]
    pub classification: ClassificationMode,
}

/// How a completed bulk operation is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Substring scan of the combined response text for failure markers.
    #[default]
    MarkerScan,
    /// Per-item HTTP status; any status of 400 or above fails the batch.
    StructuredStatus,
}

impl_string_conversions!(ClassificationMode {
    MarkerScan => "marker_scan",
    StructuredStatus => "structured_status",
});

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            graph_base_url: default_graph_base_url(),
            login_base_url: default_login_base_url(),
            timeout_secs: default_timeout_secs(),
            classification: ClassificationMode::default(),
        }
    }
}

impl GraphListConfig {
    /// Locator of the configured list.
    pub fn locator(&self) -> ResourceLocator {
        ResourceLocator::new(&self.list.site_id, &self.list.list_id)
    }

    /// Credential profile of the configured app registration.
    pub fn profile(&self) -> CredentialProfile {
        CredentialProfile {
            client_id: self.auth.client_id.clone(),
            tenant_id: self.auth.tenant_id.clone(),
            scope: self.auth.scope.clone(),
            secret_name: self.auth.client_secret_name.clone(),
        }
    }
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_graph_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

fn default_login_base_url() -> String {
    DEFAULT_LOGIN_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
