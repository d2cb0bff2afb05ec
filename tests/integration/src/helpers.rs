//! Test helpers for integration tests
//!
//! Spawns the console API against a [`FakeBackend`] and wraps the HTTP
//! calls the tests make.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use hospeda_api::{create_app, create_app_state};
use hospeda_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fake_backend::{FakeBackend, ADMIN_EMAIL, JWT_SECRET, PASSWORD, RECEPTIONIST_EMAIL};

/// Console API server wired to its own fake backend
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub backend: FakeBackend,
    _handle: JoinHandle<()>,
}

/// Configuration pointing the console at `backend_url`
pub fn test_config(backend_url: &str) -> Result<AppConfig> {
    let env = [
        ("API_PORT", "0".to_string()),
        ("BACKEND_URL", backend_url.to_string()),
        ("BACKEND_TIMEOUT_SECS", "5".to_string()),
        ("JWT_SECRET", JWT_SECRET.to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string()),
        ("RATE_LIMIT_BURST", "1000".to_string()),
        ("BILLING_COMPANY_NAME", "Hotel Hospeda+".to_string()),
        ("BILLING_TAX_ID", "B12345678".to_string()),
    ];

    AppConfig::from_lookup(|key| {
        env.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

impl TestServer {
    /// Start a fake backend and a console API in front of it
    pub async fn start() -> Result<Self> {
        let backend = FakeBackend::start().await?;
        Self::start_with_backend(backend).await
    }

    pub async fn start_with_backend(backend: FakeBackend) -> Result<Self> {
        let config = test_config(&backend.url())?;
        let state = create_app_state(config)?;
        let app = create_app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            backend,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Log in and return the bearer token
    pub async fn login(&self, email: &str) -> Result<String> {
        let response = self
            .post(
                "/api/auth/login",
                &serde_json::json!({ "email": email, "password": PASSWORD }),
            )
            .await?;
        let body: Value = assert_json(response, StatusCode::OK).await?;
        body["access_token"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| anyhow::anyhow!("login reply without access_token: {body}"))
    }

    pub async fn admin_token(&self) -> Result<String> {
        self.login(ADMIN_EMAIL).await
    }

    pub async fn receptionist_token(&self) -> Result<String> {
        self.login(RECEPTIONIST_EMAIL).await
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error` object
pub async fn assert_error(response: Response, expected_status: StatusCode, code: &str) -> Result<Value> {
    let body: Value = assert_json(response, expected_status).await?;
    let error = body["error"].clone();
    if error["code"] != code {
        anyhow::bail!("Expected error code {code}, got {error}");
    }
    Ok(error)
}
