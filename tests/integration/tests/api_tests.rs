//! API Integration Tests
//!
//! Each test starts its own fake hotel backend and console API; nothing
//! external is required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

fn ids(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["id"].as_i64()).collect())
        .unwrap_or_default()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_with_backend_up() {
    let server = server().await;
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["backend"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_lands_by_role() {
    let server = server().await;

    let response = server
        .post(
            "/api/auth/login",
            &serde_json::json!({ "email": "recepcion@hospeda.test", "password": "secreto" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["landing"], "reservations");
    assert_eq!(body["user"]["role"], "recepcionista");

    let token = server.admin_token().await.unwrap();
    let response = server.get_auth("/api/session", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["landing"], "users");
    let menu: Vec<&str> = body["menu"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["key"].as_str())
        .collect();
    assert!(menu.contains(&"users"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = server().await;
    let response = server
        .post(
            "/api/auth/login",
            &serde_json::json!({ "email": "admin@hospeda.test", "password": "nope" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unauthorized_access() {
    let server = server().await;
    let response = server.get("/api/reservations").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();

    let response = server.get_auth("/api/reservations", "garbage").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_receptionist_cannot_manage_users() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server.get_auth("/api/users", &token).await.unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "MISSING_CAPABILITY")
        .await
        .unwrap();

    let admin = server.admin_token().await.unwrap();
    let response = server.get_auth("/api/users", &admin).await.unwrap();
    let users: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ids(&users), vec![1, 2]);
}

// ============================================================================
// Room and Availability Tests
// ============================================================================

#[tokio::test]
async fn test_room_catalogue() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server.get_auth("/api/rooms", &token).await.unwrap();
    let rooms: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ids(&rooms), vec![ROOM_101, ROOM_102, ROOM_201]);
    assert_eq!(rooms[1]["type"], "doble");
    assert_eq!(rooms[1]["base_rate"], "80.00");

    let response = server
        .get_auth("/api/rooms/search?type=doble", &token)
        .await
        .unwrap();
    let rooms: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ids(&rooms), vec![ROOM_102]);

    let response = server.get_auth("/api/rooms/999", &token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_ROOM")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_availability_follows_bookings() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-01", "2024-08-03", &[ROOM_101]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let available = |body: &Value, room: i64| {
        body.as_array()
            .unwrap()
            .iter()
            .find(|item| item["id"] == room)
            .map(|item| item["available"].as_bool().unwrap())
            .unwrap()
    };

    // Overlapping stay
    let response = server
        .get_auth(
            "/api/rooms/availability?check_in=2024-08-02&check_out=2024-08-04",
            &token,
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!available(&body, ROOM_101));
    assert!(available(&body, ROOM_102));
    assert!(!available(&body, ROOM_201));

    // Check-in on the previous guest's check-out day
    let response = server
        .get_auth(
            "/api/rooms/availability?check_in=2024-08-03&check_out=2024-08-05",
            &token,
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(available(&body, ROOM_101));

    let response = server
        .get_auth(
            "/api/rooms/availability?check_in=2024-08-05&check_out=2024-08-05",
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_reservation_conflict() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-01", "2024-08-03", &[ROOM_101, ROOM_102]),
        )
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["nights"], 2);
    assert_eq!(created["guest_name"], "Lucía Fernández Ruiz");
    assert_eq!(created["stay_amount"], "260.00");
    assert_eq!(created["rooms"][0]["room_label"], "101");

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-02", "2024-08-04", &[ROOM_102]),
        )
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::CONFLICT, "ROOM_UNAVAILABLE")
        .await
        .unwrap();
    assert_eq!(error["details"]["room_id"], ROOM_102);

    // Moving the booking over its own dates is not a conflict
    let id = created["id"].as_i64().unwrap();
    let response = server
        .put_auth(
            &format!("/api/reservations/{id}"),
            &token,
            &serde_json::json!({ "check_in": "2024-08-02", "check_out": "2024-08-05" }),
        )
        .await
        .unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["nights"], 3);
}

#[tokio::test]
async fn test_reservation_validation() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-03", "2024-08-01", &[ROOM_101]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-01", "2024-08-03", &[]),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    let response = server
        .post_auth(
            "/api/reservations",
            &token,
            &reservation("2024-08-01", "2024-08-03", &[42]),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_ROOM")
        .await
        .unwrap();
}

// ============================================================================
// Invoice Tests
// ============================================================================

async fn book(server: &TestServer, token: &str, rooms: &[i64]) -> i64 {
    let response = server
        .post_auth(
            "/api/reservations",
            token,
            &reservation("2024-08-01", "2024-08-03", rooms),
        )
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    created["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_invoice_totals_and_receipt() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();
    let reservation_id = book(&server, &token, &[ROOM_101]).await;

    let response = server
        .get_auth("/api/invoices/billable-reservations", &token)
        .await
        .unwrap();
    let billable: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ids(&billable), vec![reservation_id]);
    assert_eq!(billable[0]["invoice_amount"], "100.00");

    let response = server
        .post_auth("/api/invoices", &token, &invoice(reservation_id, Some(10)))
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let invoice_id = created["id"].as_i64().unwrap();
    assert_eq!(created["amount"], "100.00");
    assert_eq!(created["totals"]["total"], "90.00");

    let response = server
        .post_auth(
            &format!("/api/invoices/{invoice_id}/lines"),
            &token,
            &invoice_line("Minibar", 2, "4.50"),
        )
        .await
        .unwrap();
    let line: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(line["subtotal"], "9.00");

    let response = server
        .get_auth(&format!("/api/invoices/{invoice_id}/totals"), &token)
        .await
        .unwrap();
    let totals: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(totals["subtotal"], "109.00");
    assert_eq!(totals["discount_amount"], "10.90");
    assert_eq!(totals["total"], "98.10");

    let response = server
        .get_auth(&format!("/api/invoices/{invoice_id}/receipt"), &token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    let receipt = response.text().await.unwrap();
    assert!(receipt.contains(&format!("INVOICE #{invoice_id}")));
    assert!(receipt.contains("Minibar"));
    assert!(receipt.contains("98.10"));

    // Invoiced reservations are no longer billable
    let response = server
        .get_auth("/api/invoices/billable-reservations", &token)
        .await
        .unwrap();
    let billable: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(ids(&billable).is_empty());
}

#[tokio::test]
async fn test_duplicate_invoice_points_at_existing() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();
    let reservation_id = book(&server, &token, &[ROOM_102]).await;

    let response = server
        .post_auth("/api/invoices", &token, &invoice(reservation_id, None))
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/invoices", &token, &invoice(reservation_id, None))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::CONFLICT, "INVOICE_ALREADY_EXISTS")
        .await
        .unwrap();
    assert_eq!(error["details"]["invoice_id"], created["id"]);
}

#[tokio::test]
async fn test_invoice_rejects_bad_discount() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();
    let reservation_id = book(&server, &token, &[ROOM_101]).await;

    let response = server
        .post_auth("/api/invoices", &token, &invoice(reservation_id, Some(140)))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_DISCOUNT")
        .await
        .unwrap();

    let response = server
        .post_auth("/api/invoices", &token, &invoice(999, None))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_RESERVATION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_oversized_invoice_line_is_rejected() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();
    let reservation_id = book(&server, &token, &[ROOM_101]).await;

    let response = server
        .post_auth("/api/invoices", &token, &invoice(reservation_id, None))
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let invoice_id = created["id"].as_i64().unwrap();

    let response = server
        .post_auth(
            &format!("/api/invoices/{invoice_id}/lines"),
            &token,
            &serde_json::json!({
                "description": "x",
                "quantity": i64::MAX,
                "unit_price": "10000000000000",
            }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    // The invoice stays readable
    let response = server
        .get_auth(&format!("/api/invoices/{invoice_id}/totals"), &token)
        .await
        .unwrap();
    let totals: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(totals["total"], "100.00");
}

#[tokio::test]
async fn test_invoice_lines_for_unassigned_invoice() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server.get_auth("/api/invoices/0/lines", &token).await.unwrap();
    let lines: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(lines, serde_json::json!([]));
}

// ============================================================================
// Guest Tests
// ============================================================================

#[tokio::test]
async fn test_guest_registration() {
    let server = server().await;
    let token = server.receptionist_token().await.unwrap();

    let response = server
        .post_auth("/api/guests", &token, &guest("X1234567L"))
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["full_name"], "Marta Ibáñez");
    let id = created["id"].as_i64().unwrap();

    let stored = server
        .backend
        .with_store(|store| store.guests.iter().any(|g| g.documento_identidad == "X1234567L"));
    assert!(stored);

    let response = server
        .get_auth(&format!("/api/guests/{id}"), &token)
        .await
        .unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["email"], "marta@example.com");

    let response = server
        .post_auth(
            "/api/guests",
            &token,
            &serde_json::json!({ "first_name": "", "last_name": "X", "identity_document": "1" }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}
