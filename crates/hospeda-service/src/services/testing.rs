//! In-memory backend used by the service unit tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use hospeda_common::{Claims, JwtService};
use hospeda_core::traits::{
    AuthGateway, GuestRepository, InvoiceLineRepository, InvoiceRepository, RepoResult,
    ReservationRepository, RoomRepository, UserRepository,
};
use hospeda_core::{
    AccessToken, DateRange, DomainError, EntityId, Guest, Invoice, InvoiceLine, PaymentMethod,
    Reservation, ReservationLine, Room, RoomStatus, RoomType, StaffRole, User,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;

use super::{ServiceContext, Session};

pub const SECRET: &str = "service-test-secret";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn claims(role: StaffRole) -> Claims {
    Claims {
        sub: Some("1".to_string()),
        email: Some(format!("{}@hospeda.test", role.as_str())),
        username: None,
        rol: role,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
        iat: None,
    }
}

pub fn session(role: StaffRole) -> Session {
    Session::from_claims(AccessToken::new("test-token"), &claims(role))
}

pub fn room(id: i64, number: u32, rate: i64) -> Room {
    Room::new(EntityId::new(id), number, RoomType::Doble, Decimal::from(rate), 2)
}

pub fn guest(id: i64) -> Guest {
    Guest {
        id: EntityId::new(id),
        first_name: "Lucía".to_string(),
        last_name: "Martín".to_string(),
        identity_document: "12345678Z".to_string(),
        email: Some("lucia@example.test".to_string()),
        phone: None,
        registered_on: None,
    }
}

pub fn reservation(id: i64, room_id: i64, rate: i64, range: DateRange) -> Reservation {
    Reservation {
        id: EntityId::new(id),
        guest_id: EntityId::new(1),
        guest: None,
        range,
        lines: vec![ReservationLine {
            id: None,
            room_id: EntityId::new(room_id),
            room_label: (100 + room_id).to_string(),
            nights: range.nights().unwrap_or(0),
            applied_rate: Decimal::from(rate),
        }],
    }
}

/// Every repository backed by vectors
pub struct InMemoryBackend {
    pub rooms: Mutex<Vec<Room>>,
    pub guests: Mutex<Vec<Guest>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub invoices: Mutex<Vec<Invoice>>,
    pub invoice_lines: Mutex<Vec<InvoiceLine>>,
    pub users: Mutex<Vec<(User, String)>>,
    next_id: AtomicI64,
    jwt: JwtService,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self {
            rooms: Mutex::default(),
            guests: Mutex::default(),
            reservations: Mutex::default(),
            invoices: Mutex::default(),
            invoice_lines: Mutex::default(),
            users: Mutex::default(),
            next_id: AtomicI64::new(100),
            jwt: JwtService::new(Some(SECRET), 0),
        }
    }
}

impl InMemoryBackend {
    fn next_id(&self) -> EntityId {
        EntityId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContext::builder()
            .auth_gateway(self.clone())
            .room_repo(self.clone())
            .guest_repo(self.clone())
            .reservation_repo(self.clone())
            .invoice_repo(self.clone())
            .invoice_line_repo(self.clone())
            .user_repo(self.clone())
            .jwt_service(Arc::new(JwtService::new(Some(SECRET), 0)))
            .build()
            .unwrap()
    }
}

fn replace<T: Clone>(items: &mut [T], item: &T, same: impl Fn(&T) -> bool) -> RepoResult<T> {
    let slot = items
        .iter_mut()
        .find(|existing| same(existing))
        .ok_or_else(|| DomainError::ResourceNotFound("no such record".to_string()))?;
    *slot = item.clone();
    Ok(item.clone())
}

#[async_trait]
impl AuthGateway for InMemoryBackend {
    async fn login(&self, email: &str, password: &str) -> RepoResult<AccessToken> {
        let users = self.users.lock();
        let (user, _) = users
            .iter()
            .find(|(u, p)| u.email == email && p == password)
            .ok_or(DomainError::InvalidCredentials)?;

        let claims = Claims {
            sub: Some(user.id.to_string()),
            email: Some(user.email.clone()),
            username: Some(user.username.clone()),
            rol: user.role,
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            iat: Some(Utc::now().timestamp()),
        };
        let token = self
            .jwt
            .issue_token(&claims)
            .map_err(|e| DomainError::InternalError(e.to_string()))?;
        Ok(AccessToken::new(token))
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for InMemoryBackend {
    async fn list(&self, _: &AccessToken) -> RepoResult<Vec<Room>> {
        Ok(self.rooms.lock().clone())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<Room>> {
        Ok(self.rooms.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_type(&self, _: &AccessToken, room_type: RoomType) -> RepoResult<Vec<Room>> {
        Ok(self.rooms.lock().iter().filter(|r| r.room_type == room_type).cloned().collect())
    }

    async fn find_by_status(&self, _: &AccessToken, status: RoomStatus) -> RepoResult<Vec<Room>> {
        Ok(self.rooms.lock().iter().filter(|r| r.status == status).cloned().collect())
    }

    async fn find_by_price_range(
        &self,
        _: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Room>> {
        Ok(self
            .rooms
            .lock()
            .iter()
            .filter(|r| r.base_rate >= min && r.base_rate <= max)
            .cloned()
            .collect())
    }

    async fn find_by_number(&self, _: &AccessToken, number: u32) -> RepoResult<Vec<Room>> {
        Ok(self.rooms.lock().iter().filter(|r| r.number == number).cloned().collect())
    }

    async fn create(&self, _: &AccessToken, room: &Room) -> RepoResult<Room> {
        let created = Room {
            id: self.next_id(),
            ..room.clone()
        };
        self.rooms.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, _: &AccessToken, room: &Room) -> RepoResult<Room> {
        replace(&mut self.rooms.lock(), room, |r| r.id == room.id)
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.rooms.lock().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl GuestRepository for InMemoryBackend {
    async fn list(&self, _: &AccessToken) -> RepoResult<Vec<Guest>> {
        Ok(self.guests.lock().clone())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<Guest>> {
        Ok(self.guests.lock().iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, _: &AccessToken, guest: &Guest) -> RepoResult<Guest> {
        let created = Guest {
            id: self.next_id(),
            ..guest.clone()
        };
        self.guests.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, _: &AccessToken, guest: &Guest) -> RepoResult<Guest> {
        replace(&mut self.guests.lock(), guest, |g| g.id == guest.id)
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.guests.lock().retain(|g| g.id != id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryBackend {
    async fn list(&self, _: &AccessToken) -> RepoResult<Vec<Reservation>> {
        Ok(self.reservations.lock().clone())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<Reservation>> {
        Ok(self.reservations.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn lines_for(
        &self,
        _: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Vec<ReservationLine>> {
        Ok(self
            .reservations
            .lock()
            .iter()
            .find(|r| r.id == reservation_id)
            .map(|r| r.lines.clone())
            .unwrap_or_default())
    }

    async fn create(&self, _: &AccessToken, reservation: &Reservation) -> RepoResult<Reservation> {
        let created = Reservation {
            id: self.next_id(),
            ..reservation.clone()
        };
        self.reservations.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, _: &AccessToken, reservation: &Reservation) -> RepoResult<Reservation> {
        replace(&mut self.reservations.lock(), reservation, |r| {
            r.id == reservation.id
        })
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.reservations.lock().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryBackend {
    async fn list(&self, _: &AccessToken) -> RepoResult<Vec<Invoice>> {
        Ok(self.invoices.lock().clone())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<Invoice>> {
        Ok(self.invoices.lock().iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_reservation(
        &self,
        _: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Option<Invoice>> {
        Ok(self
            .invoices
            .lock()
            .iter()
            .find(|i| i.reservation_id == reservation_id)
            .cloned())
    }

    async fn find_by_amount_range(
        &self,
        _: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Invoice>> {
        Ok(self
            .invoices
            .lock()
            .iter()
            .filter(|i| i.amount >= min && i.amount <= max)
            .cloned()
            .collect())
    }

    async fn find_by_payment_method(
        &self,
        _: &AccessToken,
        method: PaymentMethod,
    ) -> RepoResult<Vec<Invoice>> {
        Ok(self
            .invoices
            .lock()
            .iter()
            .filter(|i| i.payment_method == method)
            .cloned()
            .collect())
    }

    async fn create(&self, _: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice> {
        let created = Invoice {
            id: self.next_id(),
            ..invoice.clone()
        };
        self.invoices.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, _: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice> {
        replace(&mut self.invoices.lock(), invoice, |i| i.id == invoice.id)
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.invoices.lock().retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl InvoiceLineRepository for InMemoryBackend {
    async fn find_by_invoice(
        &self,
        _: &AccessToken,
        invoice_id: EntityId,
    ) -> RepoResult<Vec<InvoiceLine>> {
        Ok(self
            .invoice_lines
            .lock()
            .iter()
            .filter(|l| l.invoice_id == invoice_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<InvoiceLine>> {
        Ok(self.invoice_lines.lock().iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, _: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine> {
        let created = InvoiceLine {
            id: self.next_id(),
            ..line.clone()
        };
        self.invoice_lines.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, _: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine> {
        replace(&mut self.invoice_lines.lock(), line, |l| l.id == line.id)
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.invoice_lines.lock().retain(|l| l.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryBackend {
    async fn list(&self, _: &AccessToken) -> RepoResult<Vec<User>> {
        Ok(self.users.lock().iter().map(|(u, _)| u.clone()).collect())
    }

    async fn find_by_id(&self, _: &AccessToken, id: EntityId) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_role(&self, _: &AccessToken, role: StaffRole) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .filter(|(u, _)| u.role == role)
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn search_by_name(&self, _: &AccessToken, name: &str) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .filter(|(u, _)| u.username.contains(name))
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn find_by_email(&self, _: &AccessToken, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn find_active_since(
        &self,
        _: &AccessToken,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .filter(|(u, _)| u.active_since(since))
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn create(&self, _: &AccessToken, user: &User, password: &str) -> RepoResult<User> {
        let created = User {
            id: self.next_id(),
            ..user.clone()
        };
        self.users.lock().push((created.clone(), password.to_string()));
        Ok(created)
    }

    async fn update(
        &self,
        _: &AccessToken,
        user: &User,
        password: Option<&str>,
    ) -> RepoResult<User> {
        let mut users = self.users.lock();
        let slot = users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or_else(|| DomainError::ResourceNotFound("no such user".to_string()))?;
        slot.0 = user.clone();
        if let Some(password) = password {
            slot.1 = password.to_string();
        }
        Ok(user.clone())
    }

    async fn delete(&self, _: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.users.lock().retain(|(u, _)| u.id != id);
        Ok(())
    }
}
