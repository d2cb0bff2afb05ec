//! Availability calculator
//!
//! Decides whether a room can take a new stay given the stays already
//! booked for it. Ranges are half-open `[check_in, check_out)`, so a guest
//! may check in on the day the previous one checks out.

use serde::Serialize;

use crate::entities::Reservation;
use crate::value_objects::{DateRange, EntityId};

/// A booked stay of one room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingInterval {
    pub reservation_id: EntityId,
    pub room_id: EntityId,
    pub range: DateRange,
}

/// Flatten reservations into one interval per booked room
pub fn booking_intervals(reservations: &[Reservation]) -> Vec<BookingInterval> {
    reservations
        .iter()
        .flat_map(|reservation| {
            reservation.room_ids().map(move |room_id| BookingInterval {
                reservation_id: reservation.id,
                room_id,
                range: reservation.range,
            })
        })
        .collect()
}

/// Whether `room_id` is free for the whole `requested` range
///
/// Returns `false` for an empty or inverted request instead of failing;
/// callers reject such ranges before asking. Bookings of other rooms are
/// ignored. A booking of this room whose own range is malformed blocks the
/// room, since its real extent is unknown.
pub fn is_available(room_id: EntityId, requested: &DateRange, existing: &[BookingInterval]) -> bool {
    if !requested.is_valid() {
        return false;
    }

    existing
        .iter()
        .filter(|booking| booking.room_id == room_id)
        .all(|booking| booking.range.is_valid() && !booking.range.overlaps(requested))
}
