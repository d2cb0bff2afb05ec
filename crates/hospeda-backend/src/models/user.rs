//! User wire model (`/usuario`)

use chrono::{DateTime, Utc};
use hospeda_core::{EntityId, StaffRole};
use serde::{Deserialize, Serialize};

use super::de::lenient_datetime;

/// Staff user as returned by the backend; the password never leaves it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserModel {
    #[serde(default, alias = "id")]
    pub id_usuario: EntityId,
    #[serde(default)]
    pub nombre_usuario: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: StaffRole,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub ultimo_acceso: Option<DateTime<Utc>>,
}

/// Body for user create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub nombre_usuario: String,
    pub email: String,
    pub rol: StaffRole,
    #[serde(rename = "contraseña", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
