//! REST implementation of RoomRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

use hospeda_core::entities::{Room, RoomStatus, RoomType};
use hospeda_core::traits::{RepoResult, RoomRepository};
use hospeda_core::value_objects::{AccessToken, EntityId};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::models::{RoomModel, RoomPayload};

use super::{assigned_id, search};

/// Rooms under `/habitacion`
#[derive(Clone)]
pub struct HttpRoomRepository {
    client: BackendClient,
}

impl HttpRoomRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn search_rooms(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, String)],
    ) -> RepoResult<Vec<Room>> {
        let models: Vec<RoomModel> = search(&self.client, token, path, query).await?;
        Ok(models.into_iter().map(Room::from).collect())
    }
}

#[async_trait]
impl RoomRepository for HttpRoomRepository {
    #[instrument(skip(self, token))]
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Room>> {
        let models: Vec<RoomModel> = self
            .client
            .get(Some(token), "/habitacion", &[])
            .await
            .map_err(map_backend_error)?;

        Ok(models.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Room>> {
        let model: Option<RoomModel> = self
            .client
            .get_optional(Some(token), &format!("/habitacion/{id}"))
            .await
            .map_err(map_backend_error)?;

        Ok(model.map(Room::from))
    }

    #[instrument(skip(self, token))]
    async fn find_by_type(&self, token: &AccessToken, room_type: RoomType) -> RepoResult<Vec<Room>> {
        self.search_rooms(token, "/habitacion/tipo", &[("tipo", room_type.as_str().to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn find_by_status(&self, token: &AccessToken, status: RoomStatus) -> RepoResult<Vec<Room>> {
        self.search_rooms(token, "/habitacion/estado", &[("estado", status.as_str().to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn find_by_price_range(
        &self,
        token: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Room>> {
        self.search_rooms(
            token,
            "/habitacion/rango-precio",
            &[("precioMin", min.to_string()), ("precioMax", max.to_string())],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn find_by_number(&self, token: &AccessToken, number: u32) -> RepoResult<Vec<Room>> {
        self.search_rooms(token, "/habitacion/buscar-numero", &[("numero", number.to_string())])
            .await
    }

    #[instrument(skip(self, token, room), fields(number = room.number))]
    async fn create(&self, token: &AccessToken, room: &Room) -> RepoResult<Room> {
        let reply: Value = self
            .client
            .post(Some(token), "/habitacion", &RoomPayload::from_entity(room))
            .await
            .map_err(map_backend_error)?;

        Ok(Room {
            id: assigned_id(&reply, "id_habitacion", "room")?,
            ..room.clone()
        })
    }

    #[instrument(skip(self, token, room), fields(room_id = %room.id))]
    async fn update(&self, token: &AccessToken, room: &Room) -> RepoResult<Room> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/habitacion/{}", room.id),
                &RoomPayload::from_entity(room),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(room.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/habitacion/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
