//! Reservation handlers
//!
//! Creating or moving a reservation runs the conflict check; an
//! overlapping booking answers 409 with the offending room in `details`.

use axum::{extract::State, Json};
use hospeda_service::dto::{
    CreateReservationRequest, ReservationResponse, UpdateReservationRequest,
};
use hospeda_service::ReservationService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let reservations = ReservationService::new(state.service_context())
        .list(&session)
        .await?;
    Ok(Json(reservations))
}

/// GET /reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ReservationResponse>> {
    let reservation = ReservationService::new(state.service_context())
        .get(&session, id)
        .await?;
    Ok(Json(reservation))
}

/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let reservation = ReservationService::new(state.service_context())
        .create(&session, request)
        .await?;
    Ok(Created(Json(reservation)))
}

/// PUT /reservations/{id}
pub async fn update_reservation(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateReservationRequest>,
) -> ApiResult<Json<ReservationResponse>> {
    let reservation = ReservationService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(reservation))
}

/// DELETE /reservations/{id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    ReservationService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
