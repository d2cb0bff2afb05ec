//! # hospeda-core
//!
//! Domain layer for the Hospeda+ console: entities, value objects, the
//! availability and invoice total calculators, and the repository traits
//! implemented by the backend client. No HTTP or runtime dependencies.

pub mod availability;
pub mod billing;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use availability::{booking_intervals, is_available, BookingInterval};
pub use billing::{compute_total, round_for_display, InvoiceDraft, InvoiceTotals, RoomStay};
pub use entities::{
    Guest, Invoice, InvoiceLine, InvoiceStatus, PaymentMethod, Reservation, ReservationLine, Room,
    RoomStatus, RoomType, User,
};
pub use error::DomainError;
pub use traits::{
    AuthGateway, GuestRepository, InvoiceLineRepository, InvoiceRepository, RepoResult,
    ReservationRepository, RoomRepository, UserRepository,
};
pub use value_objects::{
    AccessToken, Capabilities, DateRange, DiscountPercent, EntityId, EntityIdParseError, StaffRole,
};
