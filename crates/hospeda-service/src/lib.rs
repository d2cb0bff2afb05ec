//! # hospeda-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, GuestService, InvoiceLineService, InvoiceService, NavigationService,
    ReservationService, RoomService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, Session, UserService,
};
