//! Authentication handlers
//!
//! Staff login and the current session's navigation.

use axum::{extract::State, Json};
use hospeda_service::dto::{LoginRequest, LoginResponse, SessionResponse};
use hospeda_service::{AuthService, NavigationService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Log in with backend credentials
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Current user, capabilities and menu
///
/// GET /session
pub async fn session(AuthUser(session): AuthUser) -> Json<SessionResponse> {
    Json(NavigationService::describe(&session))
}
