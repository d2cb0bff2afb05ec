//! # hospeda-backend
//!
//! REST client for the hotel backend implementing the repository traits.
//!
//! ## Overview
//!
//! The backend owns every entity; this crate provides:
//!
//! - [`BackendClient`], a `reqwest` wrapper with bearer auth and timeouts
//! - Wire models with the backend's field names and lenient number parsing
//! - Entity ↔ model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hospeda_backend::{BackendClient, HttpRoomRepository};
//! use hospeda_common::AppConfig;
//! use hospeda_core::traits::RoomRepository;
//!
//! async fn example(token: &AccessToken) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let client = BackendClient::new(&config.backend)?;
//!     let rooms = HttpRoomRepository::new(client).list(token).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::BackendClient;
pub use error::{BackendError, ErrorBody};
pub use repositories::{
    HttpAuthGateway, HttpGuestRepository, HttpInvoiceLineRepository, HttpInvoiceRepository,
    HttpReservationRepository, HttpRoomRepository, HttpUserRepository,
};
