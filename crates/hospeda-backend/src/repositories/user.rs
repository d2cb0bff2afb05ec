//! REST implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::instrument;

use hospeda_core::entities::User;
use hospeda_core::traits::{RepoResult, UserRepository};
use hospeda_core::value_objects::{AccessToken, EntityId, StaffRole};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::models::{UserModel, UserPayload};

use super::{assigned_id, search};

/// Staff accounts under `/usuario`
#[derive(Clone)]
pub struct HttpUserRepository {
    client: BackendClient,
}

impl HttpUserRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn search_users(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, String)],
    ) -> RepoResult<Vec<User>> {
        let models: Vec<UserModel> = search(&self.client, token, path, query).await?;
        Ok(models.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    #[instrument(skip(self, token))]
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<User>> {
        let models: Vec<UserModel> = self
            .client
            .get(Some(token), "/usuario", &[])
            .await
            .map_err(map_backend_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<User>> {
        let model: Option<UserModel> = self
            .client
            .get_optional(Some(token), &format!("/usuario/{id}"))
            .await
            .map_err(map_backend_error)?;

        Ok(model.map(User::from))
    }

    #[instrument(skip(self, token))]
    async fn find_by_role(&self, token: &AccessToken, role: StaffRole) -> RepoResult<Vec<User>> {
        self.search_users(token, "/usuario/rol", &[("rol", role.as_str().to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn search_by_name(&self, token: &AccessToken, name: &str) -> RepoResult<Vec<User>> {
        self.search_users(token, "/usuario/buscar", &[("nombre", name.to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn find_by_email(&self, token: &AccessToken, email: &str) -> RepoResult<Option<User>> {
        let users = self
            .search_users(token, "/usuario/email", &[("email", email.to_string())])
            .await?;
        Ok(users.into_iter().next())
    }

    #[instrument(skip(self, token))]
    async fn find_active_since(
        &self,
        token: &AccessToken,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<User>> {
        let fecha = since.date_naive().format("%Y-%m-%d").to_string();
        let users = self
            .search_users(token, "/usuario/activos-recientes", &[("fecha", fecha)])
            .await?;

        // The backend filters by day; narrow to the exact instant
        Ok(users.into_iter().filter(|u| u.active_since(since)).collect())
    }

    #[instrument(skip(self, token, user, password), fields(email = %user.email))]
    async fn create(&self, token: &AccessToken, user: &User, password: &str) -> RepoResult<User> {
        let reply: Value = self
            .client
            .post(Some(token), "/usuario", &UserPayload::from_entity(user, Some(password)))
            .await
            .map_err(map_backend_error)?;

        Ok(User {
            id: assigned_id(&reply, "id_usuario", "user")?,
            ..user.clone()
        })
    }

    #[instrument(skip(self, token, user, password), fields(user_id = %user.id))]
    async fn update(
        &self,
        token: &AccessToken,
        user: &User,
        password: Option<&str>,
    ) -> RepoResult<User> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/usuario/{}", user.id),
                &UserPayload::from_entity(user, password),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(user.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/usuario/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
