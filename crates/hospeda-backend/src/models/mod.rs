//! Wire models for the hotel backend REST API
//!
//! Field names follow the backend's JSON. `*Model` types are what the
//! backend returns, `*Payload` types are request bodies.

pub mod de;

mod auth;
mod guest;
mod invoice;
mod reservation;
mod room;
mod user;

use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, LoginResponse};
pub use guest::{GuestModel, GuestPayload};
pub use invoice::{InvoiceLineModel, InvoiceLinePayload, InvoiceModel, InvoicePayload};
pub use reservation::{
    ReservationLineModel, ReservationLinePayload, ReservationModel, ReservationPayload, RoomRef,
};
pub use room::{RoomModel, RoomPayload};
pub use user::{UserModel, UserPayload};

/// Search endpoints answer with either one object or a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}
