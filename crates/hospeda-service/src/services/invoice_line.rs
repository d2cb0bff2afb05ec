//! Invoice line service
//!
//! Extra charges (minibar, laundry, ...) attached to an invoice.

use hospeda_core::{Capabilities, DomainError, EntityId, InvoiceLine};
use tracing::{info, instrument};

use crate::dto::{CreateInvoiceLineRequest, InvoiceLineResponse, UpdateInvoiceLineRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::session::Session;

/// Invoice line service
pub struct InvoiceLineService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvoiceLineService<'a> {
    /// Create a new InvoiceLineService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Lines of an invoice; an unassigned invoice id has none
    #[instrument(skip(self, session))]
    pub async fn list(
        &self,
        session: &Session,
        invoice_id: EntityId,
    ) -> ServiceResult<Vec<InvoiceLineResponse>> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        if invoice_id.is_unassigned() {
            return Ok(Vec::new());
        }
        let lines = self
            .ctx
            .invoice_line_repo()
            .find_by_invoice(session.token(), invoice_id)
            .await?;
        Ok(lines.iter().map(InvoiceLineResponse::from).collect())
    }

    /// Add an extra charge to an existing invoice
    #[instrument(skip(self, session, request))]
    pub async fn create(
        &self,
        session: &Session,
        invoice_id: EntityId,
        request: CreateInvoiceLineRequest,
    ) -> ServiceResult<InvoiceLineResponse> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let token = session.token();
        self.ctx
            .invoice_repo()
            .find_by_id(token, invoice_id)
            .await?
            .ok_or(DomainError::InvoiceNotFound(invoice_id))?;

        let line = InvoiceLine::new(
            invoice_id,
            request.description.trim().to_string(),
            request.quantity,
            request.unit_price,
        );
        line.validate()?;

        let created = self.ctx.invoice_line_repo().create(token, &line).await?;
        info!(line_id = %created.id, invoice_id = %invoice_id, "Invoice line added");

        Ok(InvoiceLineResponse::from(&created))
    }

    #[instrument(skip(self, session, request))]
    pub async fn update(
        &self,
        session: &Session,
        id: EntityId,
        request: UpdateInvoiceLineRequest,
    ) -> ServiceResult<InvoiceLineResponse> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        let mut line = self.get_entity(session, id).await?;

        if let Some(description) = request.description {
            line.description = description.trim().to_string();
        }
        if let Some(quantity) = request.quantity {
            line.quantity = quantity;
        }
        if let Some(unit_price) = request.unit_price {
            line.unit_price = unit_price;
        }
        line.validate()?;

        let updated = self
            .ctx
            .invoice_line_repo()
            .update(session.token(), &line)
            .await?;
        info!(line_id = %id, "Invoice line updated");

        Ok(InvoiceLineResponse::from(&updated))
    }

    #[instrument(skip(self, session))]
    pub async fn delete(&self, session: &Session, id: EntityId) -> ServiceResult<()> {
        session.require(Capabilities::MANAGE_INVOICES)?;
        self.get_entity(session, id).await?;
        self.ctx
            .invoice_line_repo()
            .delete(session.token(), id)
            .await?;
        info!(line_id = %id, "Invoice line deleted");
        Ok(())
    }

    async fn get_entity(&self, session: &Session, id: EntityId) -> ServiceResult<InvoiceLine> {
        Ok(self
            .ctx
            .invoice_line_repo()
            .find_by_id(session.token(), id)
            .await?
            .ok_or(DomainError::InvoiceLineNotFound(id))?)
    }
}
