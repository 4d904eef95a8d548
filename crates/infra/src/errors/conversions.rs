//! Conversions from external infrastructure errors into domain errors.

use graphlist_domain::{AuthError, FetchError, GraphListError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GraphListError);

impl From<InfraError> for GraphListError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GraphListError> for InfraError {
    fn from(value: GraphListError) -> Self {
        InfraError(value)
    }
}

/// Maps a failed request into the per-operation error taxonomy.
///
/// Orphan rules keep `From<reqwest::Error>` off the domain enums, so each
/// operation picks its variant through this trait.
pub trait TransportErrorExt {
    /// Timeout, connect and status aware description of the failure.
    fn transport_message(&self) -> String;

    /// Wrap as a token exchange failure.
    fn into_auth_error(self) -> AuthError;

    /// Wrap as a page request failure.
    fn into_fetch_error(self) -> FetchError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → transport errors */
/* -------------------------------------------------------------------------- */

impl TransportErrorExt for HttpError {
    fn transport_message(&self) -> String {
        if self.is_timeout() {
            return "HTTP request timed out".into();
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return format!("HTTP connection failure: {self}");
        }

        if self.is_builder() {
            return format!("invalid HTTP request: {self}");
        }

        if let Some(status) = self.status() {
            return format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            );
        }

        self.to_string()
    }

    fn into_auth_error(self) -> AuthError {
        AuthError::Transport { message: self.transport_message() }
    }

    fn into_fetch_error(self) -> FetchError {
        FetchError::Transport { message: self.transport_message() }
    }
}

/// Client construction failures are configuration problems.
impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(GraphListError::Config(format!(
            "failed to build HTTP client: {}",
            value.transport_message()
        )))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
