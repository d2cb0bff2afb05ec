//! Room handlers
//!
//! Catalogue, filtered search and the availability search.

use axum::{extract::State, Json};
use hospeda_service::dto::{
    AvailabilityQuery, CreateRoomRequest, RoomAvailabilityResponse, RoomResponse,
    RoomSearchQuery, UpdateRoomRequest,
};
use hospeda_service::RoomService;

use crate::extractors::{ApiQuery, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let rooms = RoomService::new(state.service_context()).list(&session).await?;
    Ok(Json(rooms))
}

/// GET /rooms/search
pub async fn search_rooms(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ApiQuery(query): ApiQuery<RoomSearchQuery>,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let rooms = RoomService::new(state.service_context())
        .search(&session, query)
        .await?;
    Ok(Json(rooms))
}

/// Every room with its availability for a stay
///
/// GET /rooms/availability?check_in=..&check_out=..
pub async fn room_availability(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> ApiResult<Json<Vec<RoomAvailabilityResponse>>> {
    let rooms = RoomService::new(state.service_context())
        .availability(&session, query)
        .await?;
    Ok(Json(rooms))
}

/// GET /rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<RoomResponse>> {
    let room = RoomService::new(state.service_context()).get(&session, id).await?;
    Ok(Json(room))
}

/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let room = RoomService::new(state.service_context())
        .create(&session, request)
        .await?;
    Ok(Created(Json(room)))
}

/// PUT /rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let room = RoomService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(room))
}

/// DELETE /rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    RoomService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
