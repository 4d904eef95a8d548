//! Integration tests for the client-credentials token exchange.

mod support;

use std::net::TcpListener;

use graphlist_domain::constants::USER_AGENT;
use graphlist_domain::{AuthError, Credentials, HttpConfig};
use graphlist_infra::TokenClient;
use support::http_config;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/tenant-1/oauth2/v2.0/token";

fn credentials() -> Credentials {
    Credentials::new("client-1", "p@ss&word", "tenant-1", "https://graph.microsoft.com/.default")
}

#[tokio::test]
async fn posts_client_credentials_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("user-agent", USER_AGENT))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-1"))
        .and(body_string_contains("client_secret=p%40ss%26word"))
        .and(body_string_contains("scope=https%3A%2F%2Fgraph.microsoft.com%2F.default"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"token_type":"Bearer","expires_in":3599,"ext_expires_in":3599,"access_token":"eyJ0"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = TokenClient::from_config(&http_config(&server)).unwrap();
    let token = client.acquire_token(&credentials()).await.unwrap();

    assert_eq!(token.access_token, "eyJ0");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3599);
}

#[tokio::test]
async fn rejected_request_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = TokenClient::from_config(&http_config(&server)).unwrap();
    let err = client.acquire_token(&credentials()).await.unwrap_err();

    assert_eq!(err, AuthError::Rejected { status: 401, body: r#"{"error":"invalid_client"}"#.into() });
}

#[tokio::test]
async fn malformed_token_body_is_unparsable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sign in</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = TokenClient::from_config(&http_config(&server)).unwrap();
    let err = client.acquire_token(&credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::UnparsableToken { status: 200, .. }));
}

#[tokio::test]
async fn unreachable_authority_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = HttpConfig { login_base_url: format!("http://{addr}"), ..HttpConfig::default() };
    let client = TokenClient::from_config(&config).unwrap();
    let err = client.acquire_token(&credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::Transport { .. }));
}
