//! Guest handlers

use axum::{extract::State, Json};
use hospeda_service::dto::{CreateGuestRequest, GuestResponse, UpdateGuestRequest};
use hospeda_service::GuestService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /guests
pub async fn list_guests(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<GuestResponse>>> {
    let guests = GuestService::new(state.service_context()).list(&session).await?;
    Ok(Json(guests))
}

/// GET /guests/{id}
pub async fn get_guest(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<GuestResponse>> {
    let guest = GuestService::new(state.service_context()).get(&session, id).await?;
    Ok(Json(guest))
}

/// Register a guest
///
/// POST /guests
pub async fn create_guest(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGuestRequest>,
) -> ApiResult<Created<Json<GuestResponse>>> {
    let guest = GuestService::new(state.service_context())
        .create(&session, request)
        .await?;
    Ok(Created(Json(guest)))
}

/// PUT /guests/{id}
pub async fn update_guest(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateGuestRequest>,
) -> ApiResult<Json<GuestResponse>> {
    let guest = GuestService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(guest))
}

/// DELETE /guests/{id}
pub async fn delete_guest(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    GuestService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
