//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod guests;
pub mod health;
pub mod invoice_lines;
pub mod invoices;
pub mod reservations;
pub mod rooms;
pub mod users;
