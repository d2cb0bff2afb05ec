//! Domain entities - core business objects

mod guest;
mod invoice;
mod reservation;
mod room;
mod user;

pub use guest::Guest;
pub use invoice::{Invoice, InvoiceLine, InvoiceStatus, PaymentMethod};
pub use reservation::{Reservation, ReservationLine};
pub use room::{Room, RoomStatus, RoomType};
pub use user::User;
