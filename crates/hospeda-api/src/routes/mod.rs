//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, guests, health, invoice_lines, invoices, reservations, rooms, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(room_routes())
        .merge(guest_routes())
        .merge(reservation_routes())
        .merge(invoice_routes())
        .merge(user_routes())
}

/// Login and session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/session", get(auth::session))
}

/// Room routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route("/rooms/search", get(rooms::search_rooms))
        .route("/rooms/availability", get(rooms::room_availability))
        .route(
            "/rooms/:id",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
}

/// Guest routes
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(guests::list_guests).post(guests::create_guest))
        .route(
            "/guests/:id",
            get(guests::get_guest)
                .put(guests::update_guest)
                .delete(guests::delete_guest),
        )
}

/// Reservation routes
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/reservations/:id",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
}

/// Invoice and invoice line routes
fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route("/invoices/search", get(invoices::search_invoices))
        .route(
            "/invoices/billable-reservations",
            get(invoices::billable_reservations),
        )
        .route(
            "/invoices/:id",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        .route("/invoices/:id/totals", get(invoices::invoice_totals))
        .route("/invoices/:id/receipt", get(invoices::invoice_receipt))
        .route(
            "/invoices/:id/lines",
            get(invoice_lines::list_lines).post(invoice_lines::create_line),
        )
        .route(
            "/invoice-lines/:id",
            axum::routing::put(invoice_lines::update_line).delete(invoice_lines::delete_line),
        )
}

/// Staff user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/search", get(users::search_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
