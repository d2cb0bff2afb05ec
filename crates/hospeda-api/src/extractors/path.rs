//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use hospeda_core::EntityId;

use crate::response::ApiError;

/// A positive entity id from the `:id` segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EntityId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        EntityId::parse(&raw)
            .map(IdPath)
            .map_err(|e| ApiError::invalid_path(format!("{raw}: {e}")))
    }
}

/// Any integer id, including unassigned ones (zero or negative)
#[derive(Debug, Clone, Copy)]
pub struct RawIdPath(pub EntityId);

#[async_trait]
impl<S> FromRequestParts<S> for RawIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(RawIdPath(EntityId::new(raw)))
    }
}
