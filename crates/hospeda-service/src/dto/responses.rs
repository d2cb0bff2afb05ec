//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Money values
//! are rounded for display and serialized as strings.

use chrono::{DateTime, NaiveDate, Utc};
use hospeda_core::{
    Capabilities, EntityId, InvoiceStatus, InvoiceTotals, PaymentMethod, RoomStatus, RoomType,
    StaffRole,
};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Status of each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub backend: String,
}

impl ReadinessResponse {
    pub fn ready(backend_healthy: bool) -> Self {
        Self {
            status: if backend_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                backend: if backend_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

// ============================================================================
// Auth / Session Responses
// ============================================================================

/// Identity of the signed-in staff member
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: Option<EntityId>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: String,
    pub role: StaffRole,
}

/// Login result
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: SessionUserResponse,
    /// Section the console opens after login
    pub landing: String,
}

/// Navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// Current session with its role-based menu
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUserResponse,
    pub capabilities: Capabilities,
    pub menu: Vec<MenuItem>,
    pub landing: String,
    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Room Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: EntityId,
    pub number: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub base_rate: Decimal,
    pub capacity: u8,
    pub status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Room annotated with availability for a requested stay
#[derive(Debug, Serialize)]
pub struct RoomAvailabilityResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub available: bool,
}

// ============================================================================
// Guest Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GuestResponse {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub identity_document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registered_on: Option<NaiveDate>,
}

// ============================================================================
// Reservation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReservationLineResponse {
    pub id: Option<EntityId>,
    pub room_id: EntityId,
    pub room_label: String,
    pub nights: u32,
    pub applied_rate: Decimal,
    /// `None` when nights × rate is out of range
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: EntityId,
    pub guest_id: EntityId,
    pub guest_name: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// `None` for malformed ranges stored by the backend
    pub nights: Option<u32>,
    pub rooms: Vec<ReservationLineResponse>,
    /// Σ nights × applied rate over the lines
    pub stay_amount: Option<Decimal>,
}

/// Reservation not yet invoiced
#[derive(Debug, Serialize)]
pub struct BillableReservationResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    /// Amount the invoice would store before discount
    pub invoice_amount: Decimal,
}

// ============================================================================
// Invoice Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceLineResponse {
    pub id: EntityId,
    pub invoice_id: EntityId,
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: EntityId,
    pub reservation_id: EntityId,
    pub issued_on: NaiveDate,
    /// Stored pre-discount stay amount
    pub amount: Decimal,
    pub discount_percent: Decimal,
    pub payment_method: PaymentMethod,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationResponse>,
    pub lines: Vec<InvoiceLineResponse>,
    /// Calculator output; absent in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<InvoiceTotals>,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub role: StaffRole,
    pub last_access: Option<DateTime<Utc>>,
}
