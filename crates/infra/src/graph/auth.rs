//! Client-credentials token exchange

use std::time::Duration;

use graphlist_domain::constants::USER_AGENT;
use graphlist_domain::{AccessToken, AuthError, Credentials, HttpConfig, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use super::session::parse_base_url;
use crate::errors::TransportErrorExt;
use crate::http::HttpClient;

const GRANT_TYPE: &str = "client_credentials";

/// Exchanges app credentials for a bearer token. Holds no token state.
#[derive(Clone)]
pub struct TokenClient {
    http: HttpClient,
    login_base_url: String,
}

impl TokenClient {
    /// Use `http` to talk to the identity endpoint under `login_base_url`.
    pub fn new(http: HttpClient, login_base_url: impl Into<String>) -> Self {
        Self { http, login_base_url: login_base_url.into() }
    }

    /// Build a client with its own connection pool from HTTP settings.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        parse_base_url(&config.login_base_url)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::new(http, config.login_base_url.clone()))
    }

    fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.login_base_url.trim_end_matches('/'), tenant_id)
    }

    /// One POST to the tenant's token endpoint. Nothing is retried.
    #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id, tenant_id = %credentials.tenant_id))]
    pub async fn acquire_token(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AccessToken, AuthError> {
        let request = self.http.request(Method::POST, self.token_url(&credentials.tenant_id)).form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", credentials.scope.as_str()),
            ("grant_type", GRANT_TYPE),
        ]);

        let response = self.http.send(request).await.map_err(TransportErrorExt::into_auth_error)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportErrorExt::into_auth_error)?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "token request rejected");
            return Err(AuthError::Rejected { status: status.as_u16(), body });
        }

        let token: AccessToken = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, "token response did not match the expected shape");
            AuthError::UnparsableToken { status: status.as_u16(), body: body.clone() }
        })?;

        debug!(token_type = %token.token_type, expires_in = token.expires_in, "token issued");
        Ok(token)
    }
}
