//! Repository implementations
//!
//! REST implementations of the repository traits defined in hospeda-core.
//! Each repository talks to one backend resource.

mod auth;
mod guest;
mod invoice;
mod invoice_line;
mod reservation;
mod room;
mod user;

use hospeda_core::error::DomainError;
use hospeda_core::traits::RepoResult;
use hospeda_core::value_objects::{AccessToken, EntityId};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::BackendClient;
use crate::models::OneOrMany;

pub use auth::HttpAuthGateway;
pub use guest::HttpGuestRepository;
pub use invoice::HttpInvoiceRepository;
pub use invoice_line::HttpInvoiceLineRepository;
pub use reservation::HttpReservationRepository;
pub use room::HttpRoomRepository;
pub use user::HttpUserRepository;

/// Run a search endpoint; 404 and empty replies are an empty result
async fn search<M: DeserializeOwned>(
    client: &BackendClient,
    token: &AccessToken,
    path: &str,
    query: &[(&str, String)],
) -> RepoResult<Vec<M>> {
    match client.get::<Option<OneOrMany<M>>>(Some(token), path, query).await {
        Ok(reply) => Ok(reply.map(OneOrMany::into_vec).unwrap_or_default()),
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Id the backend assigned in a create reply
fn assigned_id(reply: &Value, key: &str, resource: &str) -> RepoResult<EntityId> {
    [key, "id"]
        .iter()
        .find_map(|k| reply.get(*k))
        .and_then(|v| serde_json::from_value::<EntityId>(v.clone()).ok())
        .filter(|id| !id.is_unassigned())
        .ok_or_else(|| DomainError::InternalError(format!("backend did not assign a {resource} id")))
}
