//! REST implementation of GuestRepository

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use hospeda_core::entities::Guest;
use hospeda_core::traits::{GuestRepository, RepoResult};
use hospeda_core::value_objects::{AccessToken, EntityId};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::models::{GuestModel, GuestPayload};

use super::assigned_id;

/// Guests under `/huesped`
#[derive(Clone)]
pub struct HttpGuestRepository {
    client: BackendClient,
}

impl HttpGuestRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GuestRepository for HttpGuestRepository {
    #[instrument(skip(self, token))]
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Guest>> {
        let models: Vec<GuestModel> = self
            .client
            .get(Some(token), "/huesped", &[])
            .await
            .map_err(map_backend_error)?;

        Ok(models.into_iter().map(Guest::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Guest>> {
        let model: Option<GuestModel> = self
            .client
            .get_optional(Some(token), &format!("/huesped/{id}"))
            .await
            .map_err(map_backend_error)?;

        Ok(model.map(Guest::from))
    }

    #[instrument(skip(self, token, guest))]
    async fn create(&self, token: &AccessToken, guest: &Guest) -> RepoResult<Guest> {
        let reply: Value = self
            .client
            .post(Some(token), "/huesped", &GuestPayload::from_entity(guest))
            .await
            .map_err(map_backend_error)?;

        Ok(Guest {
            id: assigned_id(&reply, "id_huesped", "guest")?,
            ..guest.clone()
        })
    }

    #[instrument(skip(self, token, guest), fields(guest_id = %guest.id))]
    async fn update(&self, token: &AccessToken, guest: &Guest) -> RepoResult<Guest> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/huesped/{}", guest.id),
                &GuestPayload::from_entity(guest),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(guest.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/huesped/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
