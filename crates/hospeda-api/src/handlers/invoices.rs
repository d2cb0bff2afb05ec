//! Invoice handlers
//!
//! Issuing, totals, the printable receipt and the list of reservations
//! still waiting for an invoice.

use axum::{extract::State, Json};
use hospeda_core::InvoiceTotals;
use hospeda_service::dto::{
    BillableReservationResponse, CreateInvoiceRequest, InvoiceResponse, InvoiceSearchQuery,
    UpdateInvoiceRequest,
};
use hospeda_service::InvoiceService;

use crate::extractors::{ApiQuery, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent, PlainText};
use crate::state::AppState;

/// GET /invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<InvoiceResponse>>> {
    let invoices = InvoiceService::new(state.service_context())
        .list(&session)
        .await?;
    Ok(Json(invoices))
}

/// GET /invoices/search
pub async fn search_invoices(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ApiQuery(query): ApiQuery<InvoiceSearchQuery>,
) -> ApiResult<Json<Vec<InvoiceResponse>>> {
    let invoices = InvoiceService::new(state.service_context())
        .search(&session, query)
        .await?;
    Ok(Json(invoices))
}

/// GET /invoices/billable-reservations
pub async fn billable_reservations(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
) -> ApiResult<Json<Vec<BillableReservationResponse>>> {
    let reservations = InvoiceService::new(state.service_context())
        .billable_reservations(&session)
        .await?;
    Ok(Json(reservations))
}

/// Invoice with its reservation, lines and computed totals
///
/// GET /invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<InvoiceResponse>> {
    let invoice = InvoiceService::new(state.service_context())
        .get(&session, id)
        .await?;
    Ok(Json(invoice))
}

/// GET /invoices/{id}/totals
pub async fn invoice_totals(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<InvoiceTotals>> {
    let totals = InvoiceService::new(state.service_context())
        .totals(&session, id)
        .await?;
    Ok(Json(totals))
}

/// Printable receipt
///
/// GET /invoices/{id}/receipt
pub async fn invoice_receipt(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<PlainText> {
    let receipt = InvoiceService::new(state.service_context())
        .receipt(&session, id)
        .await?;
    Ok(PlainText(receipt))
}

/// Issue the invoice for a reservation
///
/// POST /invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateInvoiceRequest>,
) -> ApiResult<Created<Json<InvoiceResponse>>> {
    let invoice = InvoiceService::new(state.service_context())
        .create(&session, request)
        .await?;
    Ok(Created(Json(invoice)))
}

/// PUT /invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateInvoiceRequest>,
) -> ApiResult<Json<InvoiceResponse>> {
    let invoice = InvoiceService::new(state.service_context())
        .update(&session, id, request)
        .await?;
    Ok(Json(invoice))
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    InvoiceService::new(state.service_context())
        .delete(&session, id)
        .await?;
    Ok(NoContent)
}
