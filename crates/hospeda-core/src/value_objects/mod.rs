//! Value objects - immutable types that represent domain concepts

mod access_token;
mod capabilities;
mod date_range;
mod discount;
mod entity_id;
mod staff_role;

pub use access_token::AccessToken;
pub use capabilities::Capabilities;
pub use date_range::{
    deserialize_calendar_date, deserialize_optional_calendar_date, parse_calendar_date, DateRange,
};
pub use discount::DiscountPercent;
pub use entity_id::{EntityId, EntityIdParseError};
pub use staff_role::StaffRole;
