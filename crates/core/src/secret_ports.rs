//! Secret source port
//!
//! The client secret of the app registration is resolved by name at call
//! time. Where it lives (vault, environment, file) is an adapter concern.

use graphlist_domain::Result;

/// Trait for resolving named secrets
pub trait SecretSource: Send + Sync {
    /// Return the secret stored under `name`
    fn get_secret(&self, name: &str) -> Result<String>;
}
