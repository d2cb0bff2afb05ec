//! REST implementation of AuthGateway

use async_trait::async_trait;
use tracing::instrument;

use hospeda_core::error::DomainError;
use hospeda_core::traits::{AuthGateway, RepoResult};
use hospeda_core::value_objects::AccessToken;

use crate::client::BackendClient;
use crate::models::{LoginRequest, LoginResponse};

/// Login against `POST /auth/login`
#[derive(Clone)]
pub struct HttpAuthGateway {
    client: BackendClient,
}

impl HttpAuthGateway {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    #[instrument(skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> RepoResult<AccessToken> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let reply: LoginResponse = self
            .client
            .post(None, "/auth/login", &request)
            .await
            .map_err(|e| match e.status() {
                Some(400 | 401 | 403 | 404) => DomainError::InvalidCredentials,
                _ => e.into(),
            })?;

        if reply.access_token.trim().is_empty() {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(AccessToken::new(reply.access_token))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        self.client.ping().await.map_err(Into::into)
    }
}
