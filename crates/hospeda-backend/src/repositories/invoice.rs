//! REST implementation of InvoiceRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{instrument, warn};

use hospeda_core::entities::{Invoice, PaymentMethod};
use hospeda_core::error::DomainError;
use hospeda_core::traits::{InvoiceRepository, RepoResult};
use hospeda_core::value_objects::{AccessToken, EntityId};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::models::{InvoiceModel, InvoicePayload};

use super::{assigned_id, search};

/// Invoices under `/factura`
#[derive(Clone)]
pub struct HttpInvoiceRepository {
    client: BackendClient,
}

impl HttpInvoiceRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn all_models(&self, token: &AccessToken) -> RepoResult<Vec<InvoiceModel>> {
        self.client
            .get(Some(token), "/factura", &[])
            .await
            .map_err(map_backend_error)
    }
}

/// Convert models, skipping the ones the domain cannot represent
fn to_invoices(models: Vec<InvoiceModel>) -> Vec<Invoice> {
    models
        .into_iter()
        .filter_map(|model| {
            let id = model.id_factura;
            Invoice::try_from(model)
                .map_err(|e| warn!(invoice_id = %id, error = %e, "Skipping invoice"))
                .ok()
        })
        .collect()
}

#[async_trait]
impl InvoiceRepository for HttpInvoiceRepository {
    #[instrument(skip(self, token))]
    async fn list(&self, token: &AccessToken) -> RepoResult<Vec<Invoice>> {
        Ok(to_invoices(self.all_models(token).await?))
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<Invoice>> {
        let model: Option<InvoiceModel> = self
            .client
            .get_optional(Some(token), &format!("/factura/{id}"))
            .await
            .map_err(map_backend_error)?;

        model.map(Invoice::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn find_by_reservation(
        &self,
        token: &AccessToken,
        reservation_id: EntityId,
    ) -> RepoResult<Option<Invoice>> {
        let models = self.all_models(token).await?;
        models
            .into_iter()
            .find(|model| model.id_reserva == reservation_id)
            .map(Invoice::try_from)
            .transpose()
    }

    #[instrument(skip(self, token))]
    async fn find_by_amount_range(
        &self,
        token: &AccessToken,
        min: Decimal,
        max: Decimal,
    ) -> RepoResult<Vec<Invoice>> {
        let models = search(
            &self.client,
            token,
            "/factura/rango-monto",
            &[("montoMin", min.to_string()), ("montoMax", max.to_string())],
        )
        .await?;
        Ok(to_invoices(models))
    }

    #[instrument(skip(self, token))]
    async fn find_by_payment_method(
        &self,
        token: &AccessToken,
        method: PaymentMethod,
    ) -> RepoResult<Vec<Invoice>> {
        let models = search(
            &self.client,
            token,
            "/factura/metodo-pago",
            &[("metodo", method.as_str().to_string())],
        )
        .await?;
        Ok(to_invoices(models))
    }

    #[instrument(skip(self, token, invoice), fields(reservation_id = %invoice.reservation_id))]
    async fn create(&self, token: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice> {
        let reply: Value = self
            .client
            .post(Some(token), "/factura", &InvoicePayload::from_entity(invoice))
            .await
            .map_err(|e| {
                if e.is_duplicate_invoice() {
                    DomainError::InvoiceAlreadyExists {
                        reservation_id: invoice.reservation_id,
                        invoice_id: e.invoice_id(),
                    }
                } else {
                    e.into()
                }
            })?;

        Ok(Invoice {
            id: assigned_id(&reply, "id_factura", "invoice")?,
            ..invoice.clone()
        })
    }

    #[instrument(skip(self, token, invoice), fields(invoice_id = %invoice.id))]
    async fn update(&self, token: &AccessToken, invoice: &Invoice) -> RepoResult<Invoice> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/factura/{}", invoice.id),
                &InvoicePayload::from_entity(invoice),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(invoice.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/factura/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
