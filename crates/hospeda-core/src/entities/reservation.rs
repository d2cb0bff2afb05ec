//! Reservation entity - a guest's stay across one or more rooms

use rust_decimal::Decimal;

use super::Guest;
use crate::billing::{checked_product, checked_sum};
use crate::error::DomainError;
use crate::value_objects::{DateRange, EntityId};

/// One booked room within a reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationLine {
    pub id: Option<EntityId>,
    pub room_id: EntityId,
    /// Room number for display; the room id when the backend omits it
    pub room_label: String,
    pub nights: u32,
    pub applied_rate: Decimal,
}

impl ReservationLine {
    /// Amount for this room before any discount
    pub fn amount(&self) -> Result<Decimal, DomainError> {
        checked_product(Decimal::from(self.nights), self.applied_rate)
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: EntityId,
    pub guest_id: EntityId,
    pub guest: Option<Guest>,
    pub range: DateRange,
    pub lines: Vec<ReservationLine>,
}

impl Reservation {
    /// Rooms booked by this reservation
    pub fn room_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.lines.iter().map(|line| line.room_id)
    }

    pub fn books_room(&self, room_id: EntityId) -> bool {
        self.room_ids().any(|id| id == room_id)
    }

    /// Combined nightly rate of every booked room
    pub fn nightly_rate(&self) -> Result<Decimal, DomainError> {
        checked_sum(self.lines.iter().map(|line| Ok(line.applied_rate)))
    }

    /// Pre-discount amount as recorded on the reservation lines
    pub fn stay_amount(&self) -> Result<Decimal, DomainError> {
        checked_sum(self.lines.iter().map(ReservationLine::amount))
    }

    /// Comma-separated room labels
    pub fn room_labels(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.room_label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
