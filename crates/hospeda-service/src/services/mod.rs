//! Business logic services
//!
//! Every service borrows the [`ServiceContext`] and takes the caller's
//! [`Session`] explicitly; there is no ambient identity.

pub mod auth;
pub mod context;
pub mod error;
pub mod guest;
pub mod invoice;
pub mod invoice_line;
pub mod navigation;
pub mod receipt;
pub mod reservation;
pub mod room;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guest::GuestService;
pub use invoice::InvoiceService;
pub use invoice_line::InvoiceLineService;
pub use navigation::NavigationService;
pub use reservation::ReservationService;
pub use room::RoomService;
pub use session::Session;
pub use user::UserService;
