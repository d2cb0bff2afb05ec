//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::value_objects::EntityId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Room not found: {0}")]
    RoomNotFound(EntityId),

    #[error("Guest not found: {0}")]
    GuestNotFound(EntityId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(EntityId),

    #[error("Invoice not found: {0}")]
    InvoiceNotFound(EntityId),

    #[error("Invoice line not found: {0}")]
    InvoiceLineNotFound(EntityId),

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidStayRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Discount must be between 0 and 100, got {0}")]
    InvalidDiscount(Decimal),

    #[error("Room capacity must be between 1 and 4, got {0}")]
    InvalidCapacity(u8),

    #[error("Nightly rate must be between 0.01 and 1000000, got {0}")]
    InvalidRate(Decimal),

    #[error("Quantity must be between 1 and 10000, got {0}")]
    InvalidQuantity(i64),

    #[error("Unit price must be between 0 and 1000000, got {0}")]
    InvalidUnitPrice(Decimal),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing capability: {0}")]
    MissingCapability(String),

    #[error("Forbidden by backend")]
    Forbidden,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Room {room_id} is not available for the requested dates")]
    RoomUnavailable { room_id: EntityId },

    #[error("An invoice already exists for reservation {reservation_id}")]
    InvoiceAlreadyExists {
        reservation_id: EntityId,
        invoice_id: Option<EntityId>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Backend rejected request: {0}")]
    BackendRejected(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::GuestNotFound(_) => "UNKNOWN_GUEST",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::InvoiceNotFound(_) => "UNKNOWN_INVOICE",
            Self::InvoiceLineNotFound(_) => "UNKNOWN_INVOICE_LINE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ResourceNotFound(_) => "NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStayRange { .. } => "INVALID_STAY_RANGE",
            Self::InvalidDiscount(_) => "INVALID_DISCOUNT",
            Self::InvalidCapacity(_) => "INVALID_CAPACITY",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::InvalidQuantity(_) => "INVALID_QUANTITY",
            Self::InvalidUnitPrice(_) => "INVALID_UNIT_PRICE",

            // Authentication / Authorization
            Self::Unauthenticated => "UNAUTHORIZED",
            Self::SessionExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::Forbidden => "FORBIDDEN",

            // Conflict
            Self::RoomUnavailable { .. } => "ROOM_UNAVAILABLE",
            Self::InvoiceAlreadyExists { .. } => "INVOICE_ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",

            // Infrastructure
            Self::BackendRejected(_) => "BACKEND_REJECTED",
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound(_)
                | Self::GuestNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::InvoiceNotFound(_)
                | Self::InvoiceLineNotFound(_)
                | Self::UserNotFound(_)
                | Self::ResourceNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStayRange { .. }
                | Self::InvalidDiscount(_)
                | Self::InvalidCapacity(_)
                | Self::InvalidRate(_)
                | Self::InvalidQuantity(_)
                | Self::InvalidUnitPrice(_)
                | Self::BackendRejected(_)
        )
    }

    /// Check if this is an authentication error (401)
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::SessionExpired | Self::InvalidCredentials
        )
    }

    /// Check if this is an authorization error (403)
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingCapability(_) | Self::Forbidden)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RoomUnavailable { .. } | Self::InvoiceAlreadyExists { .. } | Self::Conflict(_)
        )
    }
}
