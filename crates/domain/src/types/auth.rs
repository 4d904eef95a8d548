//! Credential and token types
//!
//! Secrets and bearer tokens pass through these types but never through their
//! `Debug` output.

use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "<redacted>";

/// Client-credentials grant inputs. Lives for one token request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application (client) id.
    pub client_id: String,
    /// Client secret. Redacted from `Debug`.
    pub client_secret: String,
    /// Directory (tenant) id.
    pub tenant_id: String,
    /// Requested scope.
    pub scope: String,
}

impl Credentials {
    /// Assemble credentials from their parts.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            tenant_id: tenant_id.into(),
            scope: scope.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("tenant_id", &self.tenant_id)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Everything needed to build [`Credentials`] except the secret, which is
/// looked up by name at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialProfile {
    /// Application (client) id.
    pub client_id: String,
    /// Directory (tenant) id.
    pub tenant_id: String,
    /// Requested scope.
    pub scope: String,
    /// Name resolved through the secret source.
    pub secret_name: String,
}

impl CredentialProfile {
    /// Combine the profile with a resolved secret.
    pub fn with_secret(&self, client_secret: String) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret,
            tenant_id: self.tenant_id.clone(),
            scope: self.scope.clone(),
        }
    }
}

/// Token endpoint response. The caller owns renewal; nothing refreshes it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Usually `Bearer`.
    pub token_type: String,
    /// Lifetime in seconds at issue time.
    pub expires_in: i64,
    /// Extended lifetime in seconds, zero when absent.
    #[serde(default)]
    pub ext_expires_in: i64,
    /// The opaque token. Redacted from `Debug`.
    pub access_token: String,
}

impl AccessToken {
    /// Value for the `Authorization: Bearer` header.
    pub fn bearer(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("ext_expires_in", &self.ext_expires_in)
            .field("access_token", &REDACTED)
            .finish()
    }
}
