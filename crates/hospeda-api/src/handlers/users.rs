//! Staff user handlers (administrators only)

use axum::{extract::State, Json};
use hospeda_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse, UserSearchQuery};
use hospeda_service::UserService;

use crate::extractors::{ApiQuery, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::new(state.service_context()).list(&session).await?;
    Ok(Json(users))
}

/// GET /users/search
pub async fn search_users(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ApiQuery(query): ApiQuery<UserSearchQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::new(state.service_context())
        .search(&session, query)
        .await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::new(state.service_context()).get(&session, id).await?;
    Ok(Json(user))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let user = UserService::new(state.service_context())
        .create(&session, request)
        .await?;
    Ok(Created(Json(user)))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    UserService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
