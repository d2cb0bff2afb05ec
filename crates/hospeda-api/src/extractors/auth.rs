//! Authentication extractor
//!
//! Reads the backend access token from the Authorization header and turns
//! it into a [`Session`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hospeda_service::{AuthService, Session};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated staff session
#[derive(Debug, Clone)]
pub struct AuthUser(pub Session);

impl AuthUser {
    pub fn session(&self) -> &Session {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Err(ApiError::MissingAuth);
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InvalidAuthFormat)?;

        let app_state = AppState::from_ref(state);
        let session = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::Service(e)
            })?;

        Ok(AuthUser(session))
    }
}
