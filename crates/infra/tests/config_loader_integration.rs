//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use graphlist_domain::ClassificationMode;
use graphlist_infra::config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "auth": {
            "tenant_id": "contoso-tenant",
            "client_id": "app-client",
            "client_secret_name": "SP_CLIENT_SECRET"
        },
        "list": {
            "site_id": "contoso.sharepoint.com,1,2",
            "list_id": "tasks",
            "page_limit": 20
        },
        "http": {
            "graph_base_url": "https://graph.microsoft.com/beta",
            "timeout_secs": 60
        }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config from JSON file");

    assert_eq!(config.auth.tenant_id, "contoso-tenant");
    assert_eq!(config.auth.client_secret_name, "SP_CLIENT_SECRET");
    assert_eq!(config.list.page_limit, 20);
    assert_eq!(config.http.graph_base_url, "https://graph.microsoft.com/beta");
    assert_eq!(config.http.timeout_secs, 60);
    assert_eq!(config.http.classification, ClassificationMode::MarkerScan);

    let locator = config.locator();
    assert_eq!(locator.items_path(), "sites/contoso.sharepoint.com,1,2/lists/tasks/items");
    assert_eq!(config.profile().secret_name, "SP_CLIENT_SECRET");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() -> anyhow::Result<()> {
    let toml_content = r#"
[auth]
tenant_id = "contoso-tenant"
client_id = "app-client"
client_secret_name = "SP_CLIENT_SECRET"
scope = "https://graph.microsoft.com/.default"

[list]
site_id = "site"
list_id = "list"

[http]
classification = "structured_status"
"#;

    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(toml_content.as_bytes())?;

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path)?;

    let config = config::load_from_file(Some(path.clone()))?;

    assert_eq!(config.list.page_limit, 50);
    assert_eq!(config.http.classification, ClassificationMode::StructuredStatus);

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_invalid_toml_is_reported() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(b"[auth\ntenant_id = ").expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML"));

    std::fs::remove_file(path).ok();
}
