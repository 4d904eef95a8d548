//! Environment-backed secret source

use graphlist_core::SecretSource;
use graphlist_domain::{GraphListError, Result};
use tracing::debug;

/// Resolves secret names as process environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretSource {
    prefix: Option<String>,
}

impl EnvSecretSource {
    /// Read names verbatim as variable names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every requested name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: Some(prefix.into()) }
    }

    fn variable_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}

impl SecretSource for EnvSecretSource {
    fn get_secret(&self, name: &str) -> Result<String> {
        let variable = self.variable_name(name);
        match std::env::var(&variable) {
            Ok(value) if !value.is_empty() => {
                debug!(variable = %variable, "secret resolved from environment");
                Ok(value)
            }
            _ => Err(GraphListError::Config(format!("secret '{variable}' is not set"))),
        }
    }
}
