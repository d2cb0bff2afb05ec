//! HTTP client for the hotel backend REST API
//!
//! Thin wrapper over `reqwest` that joins paths onto the configured base
//! URL, attaches the caller's bearer token and turns non-success responses
//! into [`BackendError`].

use hospeda_common::config::BackendConfig;
use hospeda_core::value_objects::AccessToken;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::BackendError;

/// Shared backend client; cheap to clone
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client with the configured timeout
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(http, &config.url))
    }

    /// Use an existing `reqwest` client
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(builder: RequestBuilder, token: Option<&AccessToken>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, BackendError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = BackendError::from_status(status.as_u16(), &body);
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %err, "Backend server error");
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let bytes = response.bytes().await?;
        // Empty replies read as JSON null
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| BackendError::Decode(e.to_string()));
        }
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let builder = Self::authorized(self.http.get(self.url(path)), token).query(query);
        Self::decode(self.send(builder).await?).await
    }

    /// GET a JSON resource; 404 is `None`
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
    ) -> Result<Option<T>, BackendError> {
        match self.get(token, path, &[]).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// POST a JSON body and decode the reply
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let builder = Self::authorized(self.http.post(self.url(path)), token).json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// PUT a JSON body and decode the reply
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let builder = Self::authorized(self.http.put(self.url(path)), token).json(body);
        Self::decode(self.send(builder).await?).await
    }

    /// DELETE a resource; the reply body is ignored
    pub async fn delete(&self, token: Option<&AccessToken>, path: &str) -> Result<(), BackendError> {
        let builder = Self::authorized(self.http.delete(self.url(path)), token);
        self.send(builder).await?;
        Ok(())
    }

    /// Any HTTP answer from the base URL counts as reachable
    pub async fn ping(&self) -> Result<(), BackendError> {
        self.http.get(self.url("/")).send().await?;
        Ok(())
    }
}
