//! Guest wire model (`/huesped`)

use chrono::NaiveDate;
use hospeda_core::value_objects::deserialize_optional_calendar_date;
use hospeda_core::EntityId;
use serde::{Deserialize, Serialize};

/// Guest as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestModel {
    #[serde(default, alias = "id")]
    pub id_huesped: EntityId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellidos: String,
    #[serde(default)]
    pub documento_identidad: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub fecha_registro: Option<NaiveDate>,
}

/// Body for guest create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestPayload {
    pub nombre: String,
    pub apellidos: String,
    pub documento_identidad: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<NaiveDate>,
}
