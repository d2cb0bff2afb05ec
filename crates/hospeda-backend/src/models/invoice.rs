//! Invoice wire models (`/factura`, `/detalle-factura`)

use chrono::NaiveDate;
use hospeda_core::value_objects::deserialize_optional_calendar_date;
use hospeda_core::{EntityId, InvoiceStatus, PaymentMethod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::{lenient_decimal, lenient_i64};
use super::ReservationModel;

/// Extra charge line as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineModel {
    #[serde(default, alias = "id", alias = "id_detalle_factura")]
    pub id_detalle: EntityId,
    #[serde(default)]
    pub id_factura: EntityId,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cantidad: i64,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub precio_unitario: Decimal,
}

/// Invoice as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceModel {
    #[serde(default, alias = "id")]
    pub id_factura: EntityId,
    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub fecha: Option<NaiveDate>,
    #[serde(default)]
    pub id_reserva: EntityId,
    /// Pre-discount amount
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub monto_total: Decimal,
    /// Discount percentage
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub descuento: Decimal,
    #[serde(default)]
    pub metodo_pago: PaymentMethod,
    #[serde(default)]
    pub estado: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserva: Option<ReservationModel>,
    #[serde(default)]
    pub detalles_factura: Vec<InvoiceLineModel>,
}

/// Body for invoice create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub fecha: NaiveDate,
    pub id_reserva: EntityId,
    pub monto_total: Decimal,
    pub descuento: Decimal,
    pub metodo_pago: PaymentMethod,
    pub estado: InvoiceStatus,
}

/// Body for invoice line create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLinePayload {
    pub id_factura: EntityId,
    pub descripcion: String,
    pub cantidad: i64,
    pub precio_unitario: Decimal,
}
