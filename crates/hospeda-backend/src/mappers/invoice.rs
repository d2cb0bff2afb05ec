//! Invoice and invoice line entity <-> model mappers

use hospeda_core::entities::{Invoice, InvoiceLine, Reservation};
use hospeda_core::error::DomainError;
use hospeda_core::value_objects::DiscountPercent;

use crate::models::{InvoiceLineModel, InvoiceLinePayload, InvoiceModel, InvoicePayload};

impl From<InvoiceLineModel> for InvoiceLine {
    fn from(model: InvoiceLineModel) -> Self {
        InvoiceLine {
            id: model.id_detalle,
            invoice_id: model.id_factura,
            description: model.descripcion,
            quantity: model.cantidad,
            unit_price: model.precio_unitario,
        }
    }
}

impl TryFrom<InvoiceModel> for Invoice {
    type Error = DomainError;

    fn try_from(model: InvoiceModel) -> Result<Self, Self::Error> {
        let issued_on = model.fecha.ok_or_else(|| {
            DomainError::ValidationError(format!("invoice {} has no issue date", model.id_factura))
        })?;

        Ok(Invoice {
            id: model.id_factura,
            reservation_id: model.id_reserva,
            issued_on,
            amount: model.monto_total,
            discount: DiscountPercent::new(model.descuento)?,
            payment_method: model.metodo_pago,
            status: model.estado,
            // An embedded reservation without dates is left out
            reservation: model.reserva.and_then(|r| Reservation::try_from(r).ok()),
            lines: model.detalles_factura.into_iter().map(Into::into).collect(),
        })
    }
}

impl InvoicePayload {
    pub fn from_entity(invoice: &Invoice) -> Self {
        Self {
            fecha: invoice.issued_on,
            id_reserva: invoice.reservation_id,
            monto_total: invoice.amount,
            descuento: invoice.discount.value(),
            metodo_pago: invoice.payment_method,
            estado: invoice.status,
        }
    }
}

impl InvoiceLinePayload {
    pub fn from_entity(line: &InvoiceLine) -> Self {
        Self {
            id_factura: line.invoice_id,
            descripcion: line.description.clone(),
            cantidad: line.quantity,
            precio_unitario: line.unit_price,
        }
    }
}
