//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use hospeda_core::value_objects::{deserialize_calendar_date, deserialize_optional_calendar_date};
use hospeda_core::{
    EntityId, InvoiceLine, InvoiceStatus, PaymentMethod, RoomStatus, RoomType, StaffRole,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// Staff login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Room Requests
// ============================================================================

/// Create room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(range(min = 1, message = "Room number must be at least 1"))]
    pub number: u32,

    #[serde(rename = "type")]
    pub room_type: RoomType,

    pub base_rate: Decimal,

    #[validate(range(min = 1, max = 4, message = "Capacity must be 1-4"))]
    pub capacity: u8,

    pub status: Option<RoomStatus>,

    #[validate(url(message = "Photo must be a URL"))]
    pub photo: Option<String>,
}

/// Update room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(range(min = 1, message = "Room number must be at least 1"))]
    pub number: Option<u32>,

    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,

    pub base_rate: Option<Decimal>,

    #[validate(range(min = 1, max = 4, message = "Capacity must be 1-4"))]
    pub capacity: Option<u8>,

    pub status: Option<RoomStatus>,

    /// Photo URL; an empty string removes it
    #[validate(custom(function = "validate_photo"))]
    pub photo: Option<String>,
}

fn validate_photo(photo: &str) -> Result<(), ValidationError> {
    if photo.trim().is_empty() || photo.validate_url() {
        return Ok(());
    }
    Err(ValidationError::new("url").with_message("Photo must be a URL".into()))
}

/// Room search filters; all given filters must match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomSearchQuery {
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub status: Option<RoomStatus>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub number: Option<u32>,
}

/// Availability search over a stay range
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_out: NaiveDate,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub number: Option<u32>,
}

// ============================================================================
// Guest Requests
// ============================================================================

/// Create guest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 30, message = "Identity document must be 1-30 characters"))]
    pub identity_document: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
}

/// Update guest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGuestRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Identity document must be 1-30 characters"))]
    pub identity_document: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// Reservation Requests
// ============================================================================

/// One room of a reservation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationRoomRequest {
    pub room_id: EntityId,

    /// Nightly rate; the room's base rate when absent
    pub rate: Option<Decimal>,
}

/// Create reservation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub guest_id: EntityId,

    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_in: NaiveDate,

    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_out: NaiveDate,

    #[validate(length(min = 1, message = "At least one room is required"), nested)]
    pub rooms: Vec<ReservationRoomRequest>,
}

/// Update reservation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    pub guest_id: Option<EntityId>,

    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub check_in: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub check_out: Option<NaiveDate>,

    /// Replaces the booked rooms when present
    #[validate(length(min = 1, message = "At least one room is required"), nested)]
    pub rooms: Option<Vec<ReservationRoomRequest>>,
}

// ============================================================================
// Invoice Requests
// ============================================================================

/// Issue an invoice for a reservation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    pub reservation_id: EntityId,

    pub payment_method: PaymentMethod,

    /// Percentage 0-100; absent means no discount
    pub discount_percent: Option<Decimal>,

    pub status: Option<InvoiceStatus>,

    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub issued_on: Option<NaiveDate>,
}

/// Update invoice request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    pub payment_method: Option<PaymentMethod>,

    pub discount_percent: Option<Decimal>,

    pub status: Option<InvoiceStatus>,

    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub issued_on: Option<NaiveDate>,
}

/// Invoice search filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceSearchQuery {
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
}

/// Add an extra charge to an invoice
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceLineRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,

    #[validate(range(min = 1, max = 10_000, message = "Quantity must be 1-10000"))]
    pub quantity: i64,

    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Decimal,
}

/// Update invoice line request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInvoiceLineRequest {
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 10_000, message = "Quantity must be 1-10000"))]
    pub quantity: Option<i64>,

    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Option<Decimal>,
}

fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO || *price > InvoiceLine::max_unit_price() {
        return Err(ValidationError::new("unit_price")
            .with_message("Unit price must be 0-1000000".into()));
    }
    Ok(())
}

// ============================================================================
// User Requests
// ============================================================================

/// Create staff user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub role: StaffRole,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

/// Update staff user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "Username must be 2-50 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub role: Option<StaffRole>,

    /// New password; the current one is kept when absent
    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: Option<String>,
}

/// User search filters; the first one given is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    pub role: Option<StaffRole>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub active_since: Option<NaiveDate>,
}
