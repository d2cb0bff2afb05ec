//! REST implementation of InvoiceLineRepository

use async_trait::async_trait;
use serde_json::Value;
use tracing::{instrument, warn};

use hospeda_core::entities::InvoiceLine;
use hospeda_core::traits::{InvoiceLineRepository, RepoResult};
use hospeda_core::value_objects::{AccessToken, EntityId};

use crate::client::BackendClient;
use crate::error::map_backend_error;
use crate::models::{InvoiceLineModel, InvoiceLinePayload};

use super::assigned_id;

/// Extra charge lines under `/detalle-factura`
#[derive(Clone)]
pub struct HttpInvoiceLineRepository {
    client: BackendClient,
}

impl HttpInvoiceLineRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoiceLineRepository for HttpInvoiceLineRepository {
    #[instrument(skip(self, token))]
    async fn find_by_invoice(
        &self,
        token: &AccessToken,
        invoice_id: EntityId,
    ) -> RepoResult<Vec<InvoiceLine>> {
        if invoice_id.is_unassigned() {
            return Ok(Vec::new());
        }

        let reply = self
            .client
            .get::<Option<Vec<InvoiceLineModel>>>(
                Some(token),
                "/detalle-factura/factura",
                &[("id_factura", invoice_id.to_string())],
            )
            .await;

        match reply {
            Ok(models) => Ok(models
                .unwrap_or_default()
                .into_iter()
                .map(InvoiceLine::from)
                .collect()),
            Err(e) if e.status() == Some(401) => Err(e.into()),
            Err(e) => {
                warn!(%invoice_id, error = %e, "Invoice lines unavailable");
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self, token))]
    async fn find_by_id(&self, token: &AccessToken, id: EntityId) -> RepoResult<Option<InvoiceLine>> {
        let model: Option<InvoiceLineModel> = self
            .client
            .get_optional(Some(token), &format!("/detalle-factura/{id}"))
            .await
            .map_err(map_backend_error)?;

        Ok(model.map(InvoiceLine::from))
    }

    #[instrument(skip(self, token, line), fields(invoice_id = %line.invoice_id))]
    async fn create(&self, token: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine> {
        let reply: Value = self
            .client
            .post(Some(token), "/detalle-factura", &InvoiceLinePayload::from_entity(line))
            .await
            .map_err(map_backend_error)?;

        Ok(InvoiceLine {
            id: assigned_id(&reply, "id_detalle", "invoice line")?,
            ..line.clone()
        })
    }

    #[instrument(skip(self, token, line), fields(line_id = %line.id))]
    async fn update(&self, token: &AccessToken, line: &InvoiceLine) -> RepoResult<InvoiceLine> {
        let _: Value = self
            .client
            .put(
                Some(token),
                &format!("/detalle-factura/{}", line.id),
                &InvoiceLinePayload::from_entity(line),
            )
            .await
            .map_err(map_backend_error)?;

        Ok(line.clone())
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, token: &AccessToken, id: EntityId) -> RepoResult<()> {
        self.client
            .delete(Some(token), &format!("/detalle-factura/{id}"))
            .await
            .map_err(map_backend_error)
    }
}
