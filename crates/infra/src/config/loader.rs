//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Required:
//! - `GRAPHLIST_TENANT_ID`: Directory (tenant) id
//! - `GRAPHLIST_CLIENT_ID`: App registration client id
//! - `GRAPHLIST_CLIENT_SECRET_NAME`: Name handed to the secret source
//! - `GRAPHLIST_SITE_ID`: Site hosting the list
//! - `GRAPHLIST_LIST_ID`: Target list
//!
//! Optional:
//! - `GRAPHLIST_SCOPE`: Token scope
//! - `GRAPHLIST_GRAPH_BASE_URL`: Graph API root
//! - `GRAPHLIST_LOGIN_BASE_URL`: Token authority root
//! - `GRAPHLIST_PAGE_LIMIT`: Maximum pages per read
//! - `GRAPHLIST_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `GRAPHLIST_STRICT_CLASSIFICATION`: Judge bulk writes by HTTP status
//!   (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./graphlist.json` or `./graphlist.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use graphlist_domain::{
    AuthConfig, ClassificationMode, GraphListConfig, GraphListError, HttpConfig, ListConfig,
    Result,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `GraphListError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<GraphListConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `GraphListError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<GraphListConfig> {
    let tenant_id = env_var("GRAPHLIST_TENANT_ID")?;
    let client_id = env_var("GRAPHLIST_CLIENT_ID")?;
    let client_secret_name = env_var("GRAPHLIST_CLIENT_SECRET_NAME")?;
    let site_id = env_var("GRAPHLIST_SITE_ID")?;
    let list_id = env_var("GRAPHLIST_LIST_ID")?;

    let defaults = HttpConfig::default();

    let scope = std::env::var("GRAPHLIST_SCOPE")
        .unwrap_or_else(|_| graphlist_domain::constants::DEFAULT_SCOPE.to_string());
    let page_limit = env_parse("GRAPHLIST_PAGE_LIMIT", "page limit")?
        .unwrap_or(graphlist_domain::constants::DEFAULT_PAGE_LIMIT);
    let timeout_secs =
        env_parse("GRAPHLIST_TIMEOUT_SECS", "timeout")?.unwrap_or(defaults.timeout_secs);
    let graph_base_url =
        std::env::var("GRAPHLIST_GRAPH_BASE_URL").unwrap_or(defaults.graph_base_url);
    let login_base_url =
        std::env::var("GRAPHLIST_LOGIN_BASE_URL").unwrap_or(defaults.login_base_url);
    let classification = if env_bool("GRAPHLIST_STRICT_CLASSIFICATION", false) {
        ClassificationMode::StructuredStatus
    } else {
        ClassificationMode::MarkerScan
    };

    Ok(GraphListConfig {
        auth: AuthConfig { tenant_id, client_id, client_secret_name, scope },
        list: ListConfig { site_id, list_id, page_limit },
        http: HttpConfig { graph_base_url, login_base_url, timeout_secs, classification },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GraphListError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<GraphListConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GraphListError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GraphListError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GraphListError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<GraphListConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GraphListError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GraphListError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(GraphListError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("graphlist.json"),
        dir.join("graphlist.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `GraphListError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        GraphListError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric environment variable
fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| GraphListError::Config(format!("Invalid {}: {}", what, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
