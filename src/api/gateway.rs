//! Authorized request gateway
//!
//! Every call to the remote API goes through [`Gateway`]. Protected calls
//! read the session from the [`TokenStore`] immediately before sending and
//! attach it as a bearer credential. A 401 on a protected call clears that
//! session and surfaces [`GatewayError::Unauthorized`]; nothing is retried.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::GatewayError;
use crate::storage::TokenStore;

/// Client for the remote expense API
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

/// A successful (2xx) response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_str(&self.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

impl Gateway {
    /// Create a gateway for the API at `base_url`
    pub fn new(
        base_url: impl Into<String>,
        tokens: TokenStore,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("expense-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// The session store this gateway reads from
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a protected request
    ///
    /// The current session, if any, is attached as a bearer credential; with
    /// no session the request goes out unauthenticated.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, GatewayError> {
        self.send(method, path, &[], body, true).await
    }

    /// Send a request to an unauthenticated endpoint (login, registration)
    ///
    /// No credential is attached and a 401 is an ordinary failure: it does
    /// not touch the stored session.
    pub async fn public(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, GatewayError> {
        self.send(method, path, &[], body, false).await
    }

    /// Protected GET decoded as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.get_json_with_query(path, &[]).await
    }

    /// Protected GET with query parameters, decoded as JSON
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        self.send(Method::GET, path, query, None::<&()>, true)
            .await?
            .json()
    }

    /// Protected POST with a JSON body, decoded as JSON
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, &[], Some(body), true).await?.json()
    }

    /// Unauthenticated POST with a JSON body
    pub(crate) async fn post_public<B>(&self, path: &str, body: &B) -> Result<ApiResponse, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, &[], Some(body), false).await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        authorized: bool,
    ) -> Result<ApiResponse, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let session = if authorized { self.tokens.get() } else { None };

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(session) = &session {
            request = request.bearer_auth(session.token());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, path, authenticated = session.is_some(), "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        debug!(%method, path, status = status.as_u16(), "response received");

        if authorized && status == StatusCode::UNAUTHORIZED {
            if let Some(session) = &session {
                if self.tokens.invalidate(session) {
                    info!(path, "session rejected by server; cleared");
                }
            }
            return Err(GatewayError::Unauthorized);
        }

        if !status.is_success() {
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(ApiResponse { status, body: text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use tempfile::TempDir;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn gateway(server: &MockServer, dir: &TempDir) -> Gateway {
        let tokens = TokenStore::open(dir.path().join("session.json")).unwrap();
        Gateway::new(server.uri(), tokens, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_attaches_bearer_credential() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);
        gateway.tokens().set(Session::new("T")).unwrap();

        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(header("authorization", "Bearer T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let response = gateway.request(Method::GET, "/categories", None).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sends_unauthenticated_without_session() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);

        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        gateway.request(Method::GET, "/categories", None).await.unwrap();

        let received: Vec<Request> = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);
        gateway.tokens().set(Session::new("stale")).unwrap();

        Mock::given(method("GET"))
            .and(path("/expenses"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway
            .request(Method::GET, "/expenses", None)
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!gateway.tokens().has_session());
        assert!(!temp_dir.path().join("session.json").exists());
    }

    #[tokio::test]
    async fn test_other_failures_leave_session_alone() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);
        gateway.tokens().set(Session::new("T")).unwrap();

        Mock::given(method("POST"))
            .and(path("/expenses"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"detail":"Category not found"}"#),
            )
            .mount(&server)
            .await;

        let err = gateway
            .request(Method::POST, "/expenses", Some(&serde_json::json!({})))
            .await
            .unwrap_err();

        match err {
            GatewayError::RequestFailed { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Category not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(gateway.tokens().has_session());
    }

    #[tokio::test]
    async fn test_public_call_ignores_session_and_401() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);
        gateway.tokens().set(Session::new("T")).unwrap();

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = gateway
            .public(Method::POST, "/auth/login", Some(&serde_json::json!({})))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(!err.is_unauthorized());
        assert!(gateway.tokens().has_session());
    }

    #[tokio::test]
    async fn test_transport_error_when_unreachable() {
        let temp_dir = TempDir::new().unwrap();
        let tokens = TokenStore::open(temp_dir.path().join("session.json")).unwrap();
        // Port 9 (discard) on localhost is closed in test environments
        let gateway = Gateway::new("http://127.0.0.1:9", tokens, Duration::from_secs(2)).unwrap();

        let err = gateway
            .request(Method::GET, "/expenses", None)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_body() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let gateway = gateway(&server, &temp_dir);

        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: Result<Vec<String>, _> = gateway.get_json("/categories").await;
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }
}
