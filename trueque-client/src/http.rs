//! HTTP client for the marketplace REST API

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{ErrorBody, LoginRequest, RegisterRequest};
use shared::models::User;

use crate::session::Session;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the marketplace backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request without body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.put(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, deserializing the response body
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring any response body
    pub async fn delete_empty(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_empty(response).await
    }

    /// Handle an HTTP response carrying a JSON body
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::error_for(status, text));
        }

        response.json().await.map_err(|err| {
            if err.is_decode() {
                ClientError::MalformedResponse(err.to_string())
            } else {
                ClientError::Transport(err)
            }
        })
    }

    /// Handle an HTTP response whose body is irrelevant
    async fn handle_empty(response: Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::error_for(status, text));
        }
        Ok(())
    }

    /// Map a non-success status onto the error taxonomy, extracting the
    /// backend's error body message when one is present.
    fn error_for(status: StatusCode, body: String) -> ClientError {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthenticated,
            StatusCode::FORBIDDEN => ClientError::AuthorizationDenied(message),
            s if s.is_server_error() => ClientError::ServerFailure {
                status: s.as_u16(),
                message,
            },
            s => ClientError::RequestRejected {
                status: s.as_u16(),
                message,
            },
        }
    }

    // ========== Auth API ==========

    /// Login with username/email and password
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        let response: shared::client::LoginResponse =
            self.post("api/auth/login", request).await?;

        if !response.success {
            return Err(ClientError::Unauthenticated);
        }
        let user = response.data.ok_or_else(|| {
            ClientError::MalformedResponse("login response missing user data".to_string())
        })?;

        tracing::debug!(user_id = user.user_id, "logged in");
        Ok(Session::authenticated(user))
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        let response: shared::client::RegisterResponse =
            self.post("api/auth/register", request).await?;

        response.user.ok_or_else(|| {
            ClientError::MalformedResponse("register response missing user data".to_string())
        })
    }
}
