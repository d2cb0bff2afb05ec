//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AvailabilityQuery, CreateGuestRequest, CreateInvoiceLineRequest, CreateInvoiceRequest,
    CreateReservationRequest, CreateRoomRequest, CreateUserRequest, InvoiceSearchQuery,
    LoginRequest, ReservationRoomRequest, RoomSearchQuery, UpdateGuestRequest,
    UpdateInvoiceLineRequest, UpdateInvoiceRequest, UpdateReservationRequest, UpdateRoomRequest,
    UpdateUserRequest, UserSearchQuery,
};

// Re-export commonly used response types
pub use responses::{
    BillableReservationResponse, GuestResponse, HealthChecks, HealthResponse,
    InvoiceLineResponse, InvoiceResponse, LoginResponse, MenuItem, ReadinessResponse,
    ReservationLineResponse, ReservationResponse, RoomAvailabilityResponse, RoomResponse,
    SessionResponse, SessionUserResponse, UserResponse,
};
