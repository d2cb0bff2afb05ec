//! REST implementation of ReservationRepository

use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

use hospeda_core::entities::{Reservation, ReservationLine};
use hospeda_core::traits::{RepoResult, ReservationRepository};
use hospeda_core::value_objects::{AccessToken, EntityId};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::mappers::line_from_model;
use crate::models::{ReservationLineModel, ReservationModel, ReservationPayload};

use super::assigned_id;

/// Reservations under `/reserva`, room lines under `/detalle-reserva`
#[derive(Clone)]
pub struct HttpReservationRepository {
    client: BackendClient,
}

impl HttpReservationRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReservationRepository for HttpReservationRepository {
    #[instrument(skip(self, token))]
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Reservation>> {
        let models: Vec<ReservationModel> = self
            .client
            .get(Some(token), "/reserva", &[])
            .await
            .map_err(map_backend_error)?;

        Ok(models
            .into_iter()
            .filter_map(|model| {
                let id = model.id_reserva;
                Reservation::try_from(model)
                    .map_err(|e| warn!(reservation_id = %id, error = %e, "Skipping reservation"))
                    .ok()
            })
            .collect())
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(
        &self,
        token: &AccessToken,
        id: EntityId,
    ) -> RepoResult<Option<Reservation>> {
        let model: Option<ReservationModel> = self
            .client
            .get_optional(Some(token), &format!("/reserva/{id}"))
            .await
            .map_err(map_backend_error)?;

        model.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn lines_for(
        &self,
        token: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Vec<ReservationLine>> {
        if reservation_id.is_unassigned() {
            return Ok(Vec::new());
        }

        let reply = self
            .client
            .get::<Option<Vec<ReservationLineModel>>>(
                Some(token),
                "/detalle-reserva/reserva",
                &[("id_reserva", reservation_id.to_string())],
            )
            .await;

        match reply {
            Ok(models) => Ok(models
                .unwrap_or_default()
                .into_iter()
                .filter_map(line_from_model)
                .collect()),
            Err(e) if e.status() == Some(401) => Err(e.into()),
            Err(e) => {
                warn!(%reservation_id, error = %e, "Reservation lines unavailable");
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self, token, reservation), fields(guest_id = %reservation.guest_id))]
    async fn create(&self, token: &AccessToken, reservation: &Reservation) -> RepoResult<Reservation> {
        let reply: Value = self
            .client
            .post(Some(token), "/reserva", &ReservationPayload::from_entity(reservation))
            .await
            .map_err(map_backend_error)?;

        Ok(Reservation {
            id: assigned_id(&reply, "id_reserva", "reservation")?,
            ..reservation.clone()
        })
    }

    #[instrument(skip(self, token, reservation), fields(reservation_id = %reservation.id))]
    async fn update(&self, token: &AccessToken, reservation: &Reservation) -> RepoResult<Reservation> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/reserva/{}", reservation.id),
                &ReservationPayload::from_entity(reservation),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(reservation.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/reserva/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
