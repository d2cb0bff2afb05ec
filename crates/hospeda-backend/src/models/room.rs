//! Room wire model (`/habitacion`)

use hospeda_core::{EntityId, RoomStatus, RoomType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::{lenient_decimal, lenient_u32, lenient_u8};

/// Room as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomModel {
    #[serde(default, alias = "id")]
    pub id_habitacion: EntityId,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub numero: u32,
    #[serde(default)]
    pub tipo: RoomType,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub precio_base: Decimal,
    #[serde(default)]
    pub estado: RoomStatus,
    #[serde(default, deserialize_with = "lenient_u8")]
    pub capacidad: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
}

/// Body for room create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPayload {
    pub numero: u32,
    pub tipo: RoomType,
    pub precio_base: Decimal,
    pub capacidad: u8,
    pub estado: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
}
