//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    AuthGateway, GuestRepository, InvoiceLineRepository, InvoiceRepository, RepoResult,
    ReservationRepository, RoomRepository, UserRepository,
};
