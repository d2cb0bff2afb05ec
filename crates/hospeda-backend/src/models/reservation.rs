//! Reservation wire models (`/reserva`, `/detalle-reserva`)

use chrono::NaiveDate;
use hospeda_core::value_objects::deserialize_optional_calendar_date;
use hospeda_core::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::{lenient_decimal, lenient_u32};
use super::GuestModel;

/// Room reference embedded in a reservation line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomRef {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub numero: u32,
}

/// One room of a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationLineModel {
    #[serde(default, alias = "id", alias = "id_detalle_reserva")]
    pub id_detalle: Option<EntityId>,
    #[serde(default)]
    pub id_reserva: Option<EntityId>,
    #[serde(default)]
    pub id_habitacion: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub noches: u32,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub precio_aplicado: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitacion: Option<RoomRef>,
}

/// Reservation as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationModel {
    #[serde(default, alias = "id")]
    pub id_reserva: EntityId,
    #[serde(default)]
    pub id_huesped: EntityId,
    #[serde(
        default,
        alias = "fecha_inicio",
        deserialize_with = "deserialize_optional_calendar_date"
    )]
    pub fecha_entrada: Option<NaiveDate>,
    #[serde(
        default,
        alias = "fecha_fin",
        deserialize_with = "deserialize_optional_calendar_date"
    )]
    pub fecha_salida: Option<NaiveDate>,
    /// Single-room reservations created without line details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_habitacion: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub huesped: Option<GuestModel>,
    #[serde(default)]
    pub detalles_reserva: Vec<ReservationLineModel>,
}

/// Line sent when creating or updating a reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationLinePayload {
    pub id_habitacion: EntityId,
    pub noches: u32,
    pub precio_aplicado: Decimal,
}

/// Body for reservation create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationPayload {
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub id_huesped: EntityId,
    /// First booked room, for backends that take a single room
    pub id_habitacion: EntityId,
    pub detalles_reserva: Vec<ReservationLinePayload>,
}
