//! Request bodies shared by the integration tests

use serde_json::{json, Value};

/// Seeded guest
pub const GUEST_ID: i64 = 1;
/// Individual room 101 at 50/night
pub const ROOM_101: i64 = 1;
/// Double room 102 at 80/night
pub const ROOM_102: i64 = 2;
/// Triple room 201, under maintenance
pub const ROOM_201: i64 = 3;

/// Reservation of the given rooms at their base rate
pub fn reservation(check_in: &str, check_out: &str, rooms: &[i64]) -> Value {
    json!({
        "guest_id": GUEST_ID,
        "check_in": check_in,
        "check_out": check_out,
        "rooms": rooms.iter().map(|id| json!({ "room_id": id })).collect::<Vec<_>>(),
    })
}

/// Invoice for a reservation paid by card
pub fn invoice(reservation_id: i64, discount_percent: Option<u32>) -> Value {
    json!({
        "reservation_id": reservation_id,
        "payment_method": "tarjeta",
        "discount_percent": discount_percent,
        "issued_on": "2024-08-03",
    })
}

pub fn invoice_line(description: &str, quantity: i64, unit_price: &str) -> Value {
    json!({
        "description": description,
        "quantity": quantity,
        "unit_price": unit_price,
    })
}

pub fn guest(document: &str) -> Value {
    json!({
        "first_name": "Marta",
        "last_name": "Ibáñez",
        "identity_document": document,
        "email": "marta@example.com",
    })
}
