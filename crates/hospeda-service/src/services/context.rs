//! Service context - dependency container for services
//!
//! Holds the backend repositories, the token decoder and receipt settings.

use std::sync::Arc;

use hospeda_common::auth::JwtService;
use hospeda_common::config::BillingConfig;
use hospeda_core::traits::{
    AuthGateway, GuestRepository, InvoiceLineRepository, InvoiceRepository,
    ReservationRepository, RoomRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    auth_gateway: Arc<dyn AuthGateway>,
    room_repo: Arc<dyn RoomRepository>,
    guest_repo: Arc<dyn GuestRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    invoice_line_repo: Arc<dyn InvoiceLineRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    billing: Arc<BillingConfig>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn auth_gateway(&self) -> &dyn AuthGateway {
        self.auth_gateway.as_ref()
    }

    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    pub fn guest_repo(&self) -> &dyn GuestRepository {
        self.guest_repo.as_ref()
    }

    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    pub fn invoice_repo(&self) -> &dyn InvoiceRepository {
        self.invoice_repo.as_ref()
    }

    pub fn invoice_line_repo(&self) -> &dyn InvoiceLineRepository {
        self.invoice_line_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the token decoder
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Company details printed on receipts
    pub fn billing(&self) -> &BillingConfig {
        self.billing.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("billing", &self.billing)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    auth_gateway: Option<Arc<dyn AuthGateway>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    guest_repo: Option<Arc<dyn GuestRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    invoice_repo: Option<Arc<dyn InvoiceRepository>>,
    invoice_line_repo: Option<Arc<dyn InvoiceLineRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    billing: Option<BillingConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth_gateway(mut self, gateway: Arc<dyn AuthGateway>) -> Self {
        self.auth_gateway = Some(gateway);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn guest_repo(mut self, repo: Arc<dyn GuestRepository>) -> Self {
        self.guest_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn invoice_repo(mut self, repo: Arc<dyn InvoiceRepository>) -> Self {
        self.invoice_repo = Some(repo);
        self
    }

    pub fn invoice_line_repo(mut self, repo: Arc<dyn InvoiceLineRepository>) -> Self {
        self.invoice_line_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Receipt settings; defaults apply when unset
    pub fn billing(mut self, billing: BillingConfig) -> Self {
        self.billing = Some(billing);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            auth_gateway: required(self.auth_gateway, "auth_gateway")?,
            room_repo: required(self.room_repo, "room_repo")?,
            guest_repo: required(self.guest_repo, "guest_repo")?,
            reservation_repo: required(self.reservation_repo, "reservation_repo")?,
            invoice_repo: required(self.invoice_repo, "invoice_repo")?,
            invoice_line_repo: required(self.invoice_line_repo, "invoice_line_repo")?,
            user_repo: required(self.user_repo, "user_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            billing: Arc::new(self.billing.unwrap_or_default()),
        })
    }
}
