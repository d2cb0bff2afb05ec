//! Repository traits (ports) - define the interface for data access
//!
//! The hotel backend owns every entity; the console reaches it only through
//! these traits. Every call carries the caller's access token because the
//! backend authorises each request on its own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entities::{
    Guest, Invoice, InvoiceLine, PaymentMethod, Reservation, ReservationLine, Room, RoomStatus,
    RoomType, User,
};
use crate::error::DomainError;
use crate::value_objects::{AccessToken, EntityId, StaffRole};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Authentication
// ============================================================================

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a backend access token
    async fn login(&self, email: &str, password: &str) -> RepoResult<AccessToken>;

    /// Check that the backend is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Room>>;

    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Room>>;

    async fn find_by_type(&self, token: &AccessToken, room_type: RoomType)
        -> RepoResult<Vec<Room>>;

    async fn find_by_status(&self, token: &AccessToken, status: RoomStatus)
        -> RepoResult<Vec<Room>>;

    /// Rooms whose base rate lies in `[min, max]`
    async fn find_by_price_range(
        &self,
        token: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Room>>;

    async fn find_by_number(&self, token: &AccessToken, number: u32) -> RepoResult<Vec<Room>>;

    /// Create a room; the backend assigns the id
    async fn create(&self, token: &AccessToken, room: &Room) -> RepoResult<Room>;

    async fn update(&self, token: &AccessToken, room: &Room) -> RepoResult<Room>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// Guest Repository
// ============================================================================

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Guest>>;

    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Guest>>;

    async fn create(&self, token: &AccessToken, guest: &Guest) -> RepoResult<Guest>;

    async fn update(&self, token: &AccessToken, guest: &Guest) -> RepoResult<Guest>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Reservation>>;

    async fn find_by_id(
        &self,
        token: &AccessToken,
        id: EntityId,
    ) -> RepoResult<Option<Reservation>>;

    /// Room lines of a reservation; malformed lines are skipped
    async fn lines_for(
        &self,
        token: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Vec<ReservationLine>>;

    async fn create(&self, token: &AccessToken, reservation: &Reservation)
        -> RepoResult<Reservation>;

    async fn update(&self, token: &AccessToken, reservation: &Reservation)
        -> RepoResult<Reservation>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// Invoice Repository
// ============================================================================

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Invoice>>;

    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Invoice>>;

    /// The invoice issued for a reservation, if any
    async fn find_by_reservation(
        &self,
        token: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Option<Invoice>>;

    /// Invoices whose stored amount lies in `[min, max]`
    async fn find_by_amount_range(
        &self,
        token: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Invoice>>;

    async fn find_by_payment_method(
        &self,
        token: &AccessToken,
        method: PaymentMethod,
    ) -> RepoResult<Vec<Invoice>>;

    /// Issue an invoice; fails with `InvoiceAlreadyExists` when the
    /// reservation is already billed
    async fn create(&self, token: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice>;

    async fn update(&self, token: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// Invoice Line Repository
// ============================================================================

#[async_trait]
pub trait InvoiceLineRepository: Send + Sync {
    async fn find_by_invoice(
        &self,
        token: &AccessToken,
        invoice_id: EntityId,
    ) -> RepoResult<Vec<InvoiceLine>>;

    async fn find_by_id(
        &self,
        token: &AccessToken,
        id: EntityId,
    ) -> RepoResult<Option<InvoiceLine>>;

    async fn create(&self, token: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine>;

    async fn update(&self, token: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<User>>;

    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<User>>;

    async fn find_by_role(&self, token: &AccessToken, role: StaffRole) -> RepoResult<Vec<User>>;

    /// Users whose name contains `name`
    async fn search_by_name(&self, token: &AccessToken, name: &str) -> RepoResult<Vec<User>>;

    async fn find_by_email(&self, token: &AccessToken, email: &str) -> RepoResult<Option<User>>;

    /// Users who logged in at or after `since`
    async fn find_active_since(
        &self,
        token: &AccessToken,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<User>>;

    /// Create a user with an initial password
    async fn create(&self, token: &AccessToken, user: &User, password: &str) -> RepoResult<User>;

    /// Update a user; `password` replaces the current one when given
    async fn update(
        &self,
        token: &AccessToken,
        user: &User,
        password: Option<&str>,
    ) -> RepoResult<User>;

    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()>;
}
