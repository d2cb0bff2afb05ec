//! Reservation service
//!
//! Creates and edits reservations, rejecting stays that clash with an
//! existing booking of any requested room.

use std::collections::HashSet;

use hospeda_core::{
    booking_intervals, is_available, AccessToken, Capabilities, DateRange, DomainError, EntityId,
    Reservation, ReservationLine, Room,
};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateReservationRequest, ReservationResponse, ReservationRoomRequest,
    UpdateReservationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::session::Session;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reservations with their room lines
    #[instrument(skip(self, session))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<ReservationResponse>> {
        session.require(Capabilities::MANAGE_RESERVATIONS)?;
        let reservations = self.load_all(session.token()).await?;
        Ok(reservations.iter().map(ReservationResponse::from).collect())
    }

    /// Get a reservation by ID
    #[instrument(skip(self, session))]
    pub async fn get(&self, session: &Session, id: EntityId) -> ServiceResult<ReservationResponse> {
        session.require(Capabilities::MANAGE_RESERVATIONS)?;
        let reservation = self.get_entity(session.token(), id).await?;
        Ok(ReservationResponse::from(&reservation))
    }

    /// Book one or more rooms for a guest
    #[instrument(skip(self, session, request), fields(guest_id = %request.guest_id))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        session.require(Capabilities::MANAGE_RESERVATIONS)?;
        let token = session.token();

        let range = DateRange::new_checked(request.check_in, request.check_out)?;
        let guest = self
            .ctx
            .guest_repo()
            .find_by_id(token, request.guest_id)
            .await?
            .ok_or(DomainError::GuestNotFound(request.guest_id))?;

        let lines = self.build_lines(token, &range, &request.rooms).await?;
        self.ensure_available(token, &range, &lines, None).await?;

        let reservation = Reservation {
            id: EntityId::default(),
            guest_id: guest.id,
            guest: Some(guest),
            range,
            lines,
        };
        let created = self
            .ctx
            .reservation_repo()
            .create(token, &reservation)
            .await?;

        info!(
            reservation_id = %created.id,
            rooms = %created.room_labels(),
            "Reservation created"
        );

        Ok(ReservationResponse::from(&created))
    }

    /// Change dates, guest or rooms of a reservation
    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        session.require(Capabilities::MANAGE_RESERVATIONS)?;
        let token = session.token();
        let mut reservation = self.get_entity(token, id).await?;

        let range = DateRange::new_checked(
            request.check_in.unwrap_or(reservation.range.check_in),
            request.check_out.unwrap_or(reservation.range.check_out),
        )?;

        if let Some(guest_id) = request.guest_id.filter(|g| *g != reservation.guest_id) {
            let guest = self
                .ctx
                .guest_repo()
                .find_by_id(token, guest_id)
                .await?
                .ok_or(DomainError::GuestNotFound(guest_id))?;
            reservation.guest_id = guest.id;
            reservation.guest = Some(guest);
        }

        let lines = match &request.rooms {
            Some(rooms) => self.build_lines(token, &range, rooms).await?,
            None => {
                let nights = range.nights()?;
                reservation
                    .lines
                    .into_iter()
                    .map(|line| ReservationLine { nights, ..line })
                    .collect()
            }
        };
        self.ensure_available(token, &range, &lines, Some(id)).await?;

        reservation.range = range;
        reservation.lines = lines;
        let updated = self
            .ctx
            .reservation_repo()
            .update(token, &reservation)
            .await?;

        info!(reservation_id = %id, "Reservation updated");

        Ok(ReservationResponse::from(&updated))
    }

    /// Cancel a reservation, releasing its rooms
    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_RESERVATIONS)?;
        let token = session.token();
        self.ctx
            .reservation_repo()
            .find_by_id(token, id)
            .await?
            .ok_or(DomainError::ReservationNotFound(id))?;

        self.ctx.reservation_repo().delete(token, id).await?;
        info!(reservation_id = %id, "Reservation deleted");
        Ok(())
    }

    /// Reservation with its lines and guest loaded
    pub(crate) async fn get_entity(
        &self,
        token: &AccessToken,
        id: EntityId,
    ) -> ServiceResult<Reservation> {
        let mut reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(token, id)
            .await?
            .ok_or(DomainError::ReservationNotFound(id))?;

        self.hydrate_lines(token, &mut reservation).await?;
        if reservation.guest.is_none() {
            reservation.guest = self
                .ctx
                .guest_repo()
                .find_by_id(token, reservation.guest_id)
                .await?;
        }
        Ok(reservation)
    }

    /// Every reservation with its room lines
    pub(crate) async fn load_all(&self, token: &AccessToken) -> ServiceResult<Vec<Reservation>> {
        let mut reservations = self.ctx.reservation_repo().list(token).await?;
        for reservation in &mut reservations {
            self.hydrate_lines(token, reservation).await?;
        }
        Ok(reservations)
    }

    async fn hydrate_lines(
        &self,
        token: &AccessToken,
        reservation: &mut Reservation,
    ) -> ServiceResult<()> {
        if reservation.lines.is_empty() {
            reservation.lines = self
                .ctx
                .reservation_repo()
                .lines_for(token, reservation.id)
                .await?;
        }
        Ok(())
    }

    async fn build_lines(
        &self,
        token: &AccessToken,
        range: &DateRange,
        rooms: &[ReservationRoomRequest],
    ) -> ServiceResult<Vec<ReservationLine>> {
        let nights = range.nights()?;
        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(rooms.len());

        for requested in rooms {
            if !seen.insert(requested.room_id) {
                return Err(ServiceError::validation(format!(
                    "room {} is listed twice",
                    requested.room_id
                )));
            }

            let room = self
                .ctx
                .room_repo()
                .find_by_id(token, requested.room_id)
                .await?
                .ok_or(DomainError::RoomNotFound(requested.room_id))?;

            let rate = requested.rate.unwrap_or(room.base_rate);
            if !Room::accepts_rate(rate) {
                return Err(DomainError::InvalidRate(rate).into());
            }

            lines.push(ReservationLine {
                id: None,
                room_id: room.id,
                room_label: room.number.to_string(),
                nights,
                applied_rate: rate,
            });
        }
        Ok(lines)
    }

    /// Fail with `RoomUnavailable` for the first room already booked in `range`
    async fn ensure_available(
        &self,
        token: &AccessToken,
        range: &DateRange,
        lines: &[ReservationLine],
        editing: Option<EntityId>,
    ) -> ServiceResult<()> {
        let mut existing = self.load_all(token).await?;
        existing.retain(|reservation| Some(reservation.id) != editing);
        let bookings = booking_intervals(&existing);

        for line in lines {
            if !is_available(line.room_id, range, &bookings) {
                warn!(room_id = %line.room_id, "Requested room is already booked");
                return Err(DomainError::RoomUnavailable {
                    room_id: line.room_id,
                }
                .into());
            }
        }
        Ok(())
    }
}
