//! Invoice service
//!
//! Issues invoices for reservations and runs the total calculator over a
//! fully loaded invoice (room stay from the reservation plus extra lines).

use std::collections::HashSet;

use chrono::Utc;
use hospeda_core::{
    compute_total, round_for_display, AccessToken, Capabilities, DiscountPercent, DomainError,
    EntityId, Invoice, InvoiceTotals, Reservation, RoomStay,
};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::dto::{
    BillableReservationResponse, CreateInvoiceRequest, InvoiceResponse, InvoiceSearchQuery,
    ReservationResponse, UpdateInvoiceRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::receipt::Receipt;
use super::reservation::ReservationService;
use super::session::Session;

/// Invoice service
pub struct InvoiceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvoiceService<'a> {
    /// Create a new InvoiceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List invoices without lines or totals
    #[instrument(skip(self, session))]
    pub async fn list(&self, session: &Session) -> ServiceResult<Vec<InvoiceResponse>> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let invoices = self.ctx.invoice_repo().list(session.token()).await?;
        Ok(invoices.iter().map(InvoiceResponse::from).collect())
    }

    /// Get an invoice with its reservation, lines and totals
    #[instrument(skip(self, session))]
    pub async fn get(&self, session: &Session, id: EntityId) -> ServiceResult<InvoiceResponse> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let invoice = self.load(session.token(), id).await?;
        Ok(with_totals(&invoice))
    }

    /// Subtotal, discount and total of an invoice, rounded for display
    #[instrument(skip(self, session))]
    pub async fn totals(&self, session: &Session, id: EntityId) -> ServiceResult<InvoiceTotals> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let invoice = self.load(session.token(), id).await?;
        Ok(compute_total(&invoice.draft()?)?.rounded())
    }

    /// Plain-text receipt for printing
    #[instrument(skip(self, session))]
    pub async fn receipt(&self, session: &Session, id: EntityId) -> ServiceResult<String> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let invoice = self.load(session.token(), id).await?;
        let totals = compute_total(&invoice.draft()?)?;
        Ok(Receipt::new(&invoice, totals, self.ctx.billing()).render())
    }

    /// Reservations that have no invoice yet
    #[instrument(skip(self, session))]
    pub async fn billable_reservations(
        &self,
        session: &Session,
    ) -> ServiceResult<Vec<BillableReservationResponse>> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();

        let invoiced: HashSet<EntityId> = self
            .ctx
            .invoice_repo()
            .list(token)
            .await?
            .iter()
            .map(|invoice| invoice.reservation_id)
            .collect();

        let reservations = ReservationService::new(self.ctx).load_all(token).await?;
        let billable = reservations
            .into_iter()
            .filter(|reservation| !invoiced.contains(&reservation.id))
            .filter_map(|reservation| match stay_subtotal(&reservation) {
                Ok(amount) => Some(BillableReservationResponse {
                    reservation: ReservationResponse::from(&reservation),
                    invoice_amount: round_for_display(amount),
                }),
                Err(e) => {
                    warn!(reservation_id = %reservation.id, error = %e, "Skipping unbillable reservation");
                    None
                }
            })
            .collect();

        Ok(billable)
    }

    /// Issue the invoice for a reservation
    ///
    /// The stored amount is the pre-discount room stay; a reservation can
    /// be invoiced only once.
    #[instrument(skip(self, session, request), fields(reservation_id = %request.reservation_id))]
    pub async fn create(
        &self,
        session: &Session,
        request: CreateInvoiceRequest,
    ) -> ServiceResult<InvoiceResponse> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();
        let reservation_id = request.reservation_id;

        let discount = DiscountPercent::from_optional(request.discount_percent)?;
        let reservation = ReservationService::new(self.ctx)
            .get_entity(token, reservation_id)
            .await?;

        if let Some(existing) = self
            .ctx
            .invoice_repo()
            .find_by_reservation(token, reservation_id)
            .await?
        {
            return Err(DomainError::InvoiceAlreadyExists {
                reservation_id,
                invoice_id: Some(existing.id),
            }
            .into());
        }

        let invoice = Invoice {
            id: EntityId::default(),
            reservation_id,
            issued_on: request
                .issued_on
                .unwrap_or_else(|| Utc::now().date_naive()),
            amount: stay_subtotal(&reservation)?,
            discount,
            payment_method: request.payment_method,
            status: request.status.unwrap_or_default(),
            reservation: Some(reservation),
            lines: Vec::new(),
        };

        let created = self.ctx.invoice_repo().create(token, &invoice).await?;
        info!(invoice_id = %created.id, amount = %created.amount, "Invoice issued");

        let created = Invoice {
            reservation: invoice.reservation,
            ..created
        };
        Ok(with_totals(&created))
    }

    /// Change payment method, status, discount or date
    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateInvoiceRequest,
    ) -> ServiceResult<InvoiceResponse> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();
        let mut invoice = self.load(token, id).await?;

        if let Some(method) = request.payment_method {
            invoice.payment_method = method;
        }
        if let Some(status) = request.status {
            invoice.status = status;
        }
        if let Some(percent) = request.discount_percent {
            invoice.discount = DiscountPercent::new(percent)?;
        }
        if let Some(issued_on) = request.issued_on {
            invoice.issued_on = issued_on;
        }

        self.ctx.invoice_repo().update(token, &invoice).await?;
        info!(invoice_id = %id, "Invoice updated");

        Ok(with_totals(&invoice))
    }

    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();
        self.ctx
            .invoice_repo()
            .find_by_id(token, id)
            .await?
            .ok_or(DomainError::InvoiceNotFound(id))?;

        self.ctx.invoice_repo().delete(token, id).await?;
        info!(invoice_id = %id, "Invoice deleted");
        Ok(())
    }

    /// Search by stored amount range and/or payment method
    #[instrument(skip(self, session))]
    pub async fn search(
        &self,
        session: &Session,
        query: InvoiceSearchQuery,
    ) -> ServiceResult<Vec<InvoiceResponse>> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();
        let repo = self.ctx.invoice_repo();

        let invoices = if query.min_amount.is_some() || query.max_amount.is_some() {
            let min = query.min_amount.unwrap_or(Decimal::ZERO);
            let max = query.max_amount.unwrap_or(Decimal::MAX);
            if min > max {
                return Err(ServiceError::validation(
                    "min_amount must not exceed max_amount",
                ));
            }
            repo.find_by_amount_range(token, min, max).await?
        } else if let Some(method) = query.payment_method {
            repo.find_by_payment_method(token, method).await?
        } else {
            repo.list(token).await?
        };

        Ok(invoices
            .iter()
            .filter(|invoice| {
                query
                    .payment_method
                    .is_none_or(|method| invoice.payment_method == method)
            })
            .map(InvoiceResponse::from)
            .collect())
    }

    /// Invoice with reservation (lines and guest) and extra lines loaded
    pub(crate) async fn load(&self, token: &AccessToken, id: EntityId) -> ServiceResult<Invoice> {
        let mut invoice = self
            .ctx
            .invoice_repo()
            .find_by_id(token, id)
            .await?
            .ok_or(DomainError::InvoiceNotFound(id))?;

        invoice.lines = self
            .ctx
            .invoice_line_repo()
            .find_by_invoice(token, id)
            .await?;

        let reservations = ReservationService::new(self.ctx);
        invoice.reservation = match reservations.get_entity(token, invoice.reservation_id).await {
            Ok(reservation) => Some(reservation),
            Err(ServiceError::Domain(DomainError::ReservationNotFound(_))) => {
                warn!(invoice_id = %id, "Invoice reservation no longer exists");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(invoice)
    }
}

/// Pre-discount amount of the room stay; zero when no room is booked
fn stay_subtotal(reservation: &Reservation) -> Result<Decimal, DomainError> {
    if reservation.lines.is_empty() {
        return Ok(Decimal::ZERO);
    }
    RoomStay {
        range: reservation.range,
        nightly_rate: reservation.nightly_rate()?,
    }
    .subtotal()
}

fn with_totals(invoice: &Invoice) -> InvoiceResponse {
    let mut response = InvoiceResponse::from(invoice);
    response.totals = invoice
        .draft()
        .and_then(|draft| compute_total(&draft))
        .inspect_err(|e| warn!(invoice_id = %invoice.id, error = %e, "Totals unavailable"))
        .ok()
        .map(|totals| totals.rounded());
    response
}
