//! Invoice line handlers
//!
//! Extra charges (minibar, laundry, ...) attached to an invoice.

use axum::{extract::State, Json};
use hospeda_service::dto::{
    CreateInvoiceLineRequest, InvoiceLineResponse, UpdateInvoiceLineRequest,
};
use hospeda_service::InvoiceLineService;

use crate::extractors::{AuthUser, IdPath, RawIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /invoices/{id}/lines
pub async fn list_lines(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    RawIdPath(invoice_id): RawIdPath,
) -> ApiResult<Json<Vec<InvoiceLineResponse>>> {
    let lines = InvoiceLineService::new(state.service_context())
        .list(&session, invoice_id)
        .await?;
    Ok(Json(lines))
}

/// POST /invoices/{id}/lines
pub async fn create_line(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(invoice_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateInvoiceLineRequest>,
) -> ApiResult<Created<Json<InvoiceLineResponse>>> {
    let line = InvoiceLineService::new(state.service_context())
        .create(&session, invoice_id, request)
        .await?;
    Ok(Created(Json(line)))
}

/// PUT /invoice-lines/{id}
pub async fn update_line(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateInvoiceLineRequest>,
) -> ApiResult<Json<InvoiceLineResponse>> {
    let line = InvoiceLineService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(line))
}

/// DELETE /invoice-lines/{id}
pub async fn delete_line(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    InvoiceLineService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
