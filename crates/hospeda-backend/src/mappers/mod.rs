//! Entity <-> wire model mappers
//!
//! - `From<Model> for Entity` / `TryFrom` where the backend may omit data
//!   the domain requires
//! - `*Payload::from_entity` builds request bodies

mod guest;
mod invoice;
mod reservation;
mod room;
mod user;

pub use reservation::line_from_model;
