//! Room service
//!
//! Room CRUD, filtered searches and the availability search over a stay
//! range.

use hospeda_core::{
    booking_intervals, is_available, Capabilities, DateRange, DomainError, EntityId, Room,
};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::dto::{
    AvailabilityQuery, CreateRoomRequest, RoomAvailabilityResponse, RoomResponse, RoomSearchQuery,
    UpdateRoomRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reservation::ReservationService;
use super::session::Session;

/// Room service
pub struct RoomService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoomService<'a> {
    /// Create a new RoomService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all rooms
    #[instrument(skip(self, session))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<RoomResponse>> {
        session.require(Capabilities::VIEW_ROOMS)?;
        let rooms = self.ctx.room_repo().list(session.token()).await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// Get room by ID
    #[instrument(skip(self, session))]
    pub async fn get(&self, session: &Session, id: EntityId) -> ServiceResult<RoomResponse> {
        session.require(Capabilities::VIEW_ROOMS)?;
        let room = self.get_entity(session, id).await?;
        Ok(RoomResponse::from(&room))
    }

    /// Search rooms; every given filter must match
    ///
    /// The most selective filter is sent to the backend and the rest are
    /// applied to its answer.
    #[instrument(skip(self, session))]
    pub async fn search(
        &self,
        session: &Session,
        query: RoomSearchQuery,
    ) -> ServiceResult<Vec<RoomResponse>> {
        session.require(Capabilities::VIEW_ROOMS)?;
        let token = session.token();
        let repo = self.ctx.room_repo();

        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(ServiceError::validation(
                    "min_price must not exceed max_price",
                ));
            }
        }

        let rooms = if let Some(number) = query.number {
            repo.find_by_number(token, number).await?
        } else if let Some(room_type) = query.room_type {
            repo.find_by_type(token, room_type).await?
        } else if let Some(status) = query.status {
            repo.find_by_status(token, status).await?
        } else if query.min_price.is_some() || query.max_price.is_some() {
            repo.find_by_price_range(
                token,
                query.min_price.unwrap_or(Decimal::ZERO),
                query.max_price.unwrap_or(Decimal::MAX),
            )
            .await?
        } else {
            repo.list(token).await?
        };

        Ok(rooms
            .iter()
            .filter(|room| matches_query(room, &query))
            .map(RoomResponse::from)
            .collect())
    }

    /// Every room annotated with whether it is free for the stay
    ///
    /// Rooms under maintenance are reported unavailable even without
    /// bookings.
    #[instrument(skip(self, session))]
    pub async fn availability(
        &self,
        session: &Session,
        query: AvailabilityQuery,
    ) -> ServiceResult<Vec<RoomAvailabilityResponse>> {
        session.require(Capabilities::VIEW_ROOMS)?;
        let range = DateRange::new_checked(query.check_in, query.check_out)?;
        let token = session.token();

        let rooms = self.ctx.room_repo().list(token).await?;
        let reservations = ReservationService::new(self.ctx).load_all(token).await?;
        let bookings = booking_intervals(&reservations);
        debug!(
            rooms = rooms.len(),
            bookings = bookings.len(),
            "Computing availability"
        );

        Ok(rooms
            .iter()
            .filter(|room| query.room_type.is_none_or(|t| room.room_type == t))
            .filter(|room| query.number.is_none_or(|n| room.number == n))
            .map(|room| RoomAvailabilityResponse {
                room: RoomResponse::from(room),
                available: !room.status.is_out_of_service()
                    && is_available(room.id, &range, &bookings),
            })
            .collect())
    }

    /// Create a room
    #[instrument(skip(self, session, request), fields(number = request.number))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        session.require(Capabilities::MANAGE_ROOMS)?;

        let mut room = Room::new(
            EntityId::default(),
            request.number,
            request.room_type,
            request.base_rate,
            request.capacity,
        );
        room.status = request.status.unwrap_or_default();
        room.photo = non_blank(request.photo);
        room.validate()?;

        let created = self.ctx.room_repo().create(session.token(), &room).await?;
        info!(room_id = %created.id, number = created.number, "Room created");

        Ok(RoomResponse::from(&created))
    }

    /// Update a room
    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateRoomRequest,
    ) -> ServiceResult<RoomResponse> {
        session.require(Capabilities::MANAGE_ROOMS)?;
        let mut room = self.get_entity(session, id).await?;

        if let Some(number) = request.number {
            room.number = number;
        }
        if let Some(room_type) = request.room_type {
            room.room_type = room_type;
        }
        if let Some(rate) = request.base_rate {
            room.base_rate = rate;
        }
        if let Some(capacity) = request.capacity {
            room.capacity = capacity;
        }
        if let Some(status) = request.status {
            room.status = status;
        }
        if request.photo.is_some() {
            room.photo = non_blank(request.photo);
        }
        room.validate()?;

        let updated = self.ctx.room_repo().update(session.token(), &room).await?;
        info!(room_id = %id, "Room updated");

        Ok(RoomResponse::from(&updated))
    }

    /// Delete a room
    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_ROOMS)?;
        self.get_entity(session, id).await?;
        self.ctx.room_repo().delete(session.token(), id).await?;
        info!(room_id = %id, "Room deleted");
        Ok(())
    }

    async fn get_entity(&self, session: &Session, id: EntityId) -> ServiceResult<Room> {
        Ok(self
            .ctx
            .room_repo()
            .find_by_id(session.token(), id)
            .await?
            .ok_or(DomainError::RoomNotFound(id))?)
    }
}

fn matches_query(room: &Room, query: &RoomSearchQuery) -> bool {
    query.number.is_none_or(|n| room.number == n)
        && query.room_type.is_none_or(|t| room.room_type == t)
        && query.status.is_none_or(|s| room.status == s)
        && query.min_price.is_none_or(|min| room.base_rate >= min)
        && query.max_price.is_none_or(|max| room.base_rate <= max)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
