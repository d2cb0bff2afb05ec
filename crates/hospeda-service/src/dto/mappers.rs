//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use hospeda_core::{
    round_for_display, Guest, Invoice, InvoiceLine, Reservation, ReservationLine, Room, User,
};

use super::responses::{
    GuestResponse, InvoiceLineResponse, InvoiceResponse, ReservationLineResponse,
    ReservationResponse, RoomResponse, SessionUserResponse, UserResponse,
};
use crate::services::Session;

// ============================================================================
// Room Mappers
// ============================================================================

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            number: room.number,
            room_type: room.room_type,
            base_rate: round_for_display(room.base_rate),
            capacity: room.capacity,
            status: room.status,
            photo: room.photo.clone(),
        }
    }
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self::from(&room)
    }
}

// ============================================================================
// Guest Mappers
// ============================================================================

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            full_name: guest.full_name(),
            identity_document: guest.identity_document.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            registered_on: guest.registered_on,
        }
    }
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self::from(&guest)
    }
}

// ============================================================================
// Reservation Mappers
// ============================================================================

impl From<&ReservationLine> for ReservationLineResponse {
    fn from(line: &ReservationLine) -> Self {
        Self {
            id: line.id,
            room_id: line.room_id,
            room_label: line.room_label.clone(),
            nights: line.nights,
            applied_rate: round_for_display(line.applied_rate),
            amount: line.amount().ok().map(round_for_display),
        }
    }
}

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            guest_id: reservation.guest_id,
            guest_name: reservation.guest.as_ref().map(Guest::full_name),
            check_in: reservation.range.check_in,
            check_out: reservation.range.check_out,
            nights: reservation.range.nights().ok(),
            rooms: reservation.lines.iter().map(Into::into).collect(),
            stay_amount: reservation.stay_amount().ok().map(round_for_display),
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self::from(&reservation)
    }
}

// ============================================================================
// Invoice Mappers
// ============================================================================

impl From<&InvoiceLine> for InvoiceLineResponse {
    fn from(line: &InvoiceLine) -> Self {
        Self {
            id: line.id,
            invoice_id: line.invoice_id,
            description: line.description.clone(),
            quantity: line.quantity,
            unit_price: round_for_display(line.unit_price),
            subtotal: line.subtotal().ok().map(round_for_display),
        }
    }
}

impl From<InvoiceLine> for InvoiceLineResponse {
    fn from(line: InvoiceLine) -> Self {
        Self::from(&line)
    }
}

impl From<&Invoice> for InvoiceResponse {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            reservation_id: invoice.reservation_id,
            issued_on: invoice.issued_on,
            amount: round_for_display(invoice.amount),
            discount_percent: invoice.discount.value(),
            payment_method: invoice.payment_method,
            status: invoice.status,
            reservation: invoice.reservation.as_ref().map(Into::into),
            lines: invoice.lines.iter().map(Into::into).collect(),
            totals: None,
        }
    }
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self::from(&invoice)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            last_access: user.last_access,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Session Mappers
// ============================================================================

impl From<&Session> for SessionUserResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id(),
            email: session.email().map(str::to_string),
            username: session.username().map(str::to_string),
            display_name: session.display_name().to_string(),
            role: session.role(),
        }
    }
}
