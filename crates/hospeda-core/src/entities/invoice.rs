//! Invoice entity - billing document for a reservation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Reservation;
use crate::billing::{checked_product, InvoiceDraft, RoomStay};
use crate::error::DomainError;
use crate::value_objects::{DiscountPercent, EntityId};

/// How the guest pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "efectivo", alias = "cash")]
    Cash,
    #[serde(rename = "tarjeta", alias = "card")]
    Card,
    #[serde(rename = "transferencia", alias = "transfer")]
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "efectivo",
            Self::Card => "tarjeta",
            Self::Transfer => "transferencia",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvoiceStatus {
    #[default]
    #[serde(rename = "pendiente", alias = "pending")]
    Pending,
    #[serde(rename = "pagada", alias = "paid")]
    Paid,
    #[serde(rename = "anulada", alias = "voided")]
    Voided,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Paid => "pagada",
            Self::Voided => "anulada",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra charge on an invoice (minibar, laundry, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    pub id: EntityId,
    pub invoice_id: EntityId,
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl InvoiceLine {
    /// Largest quantity accepted on one line
    pub const MAX_QUANTITY: i64 = 10_000;

    /// Largest unit price accepted on one line
    pub fn max_unit_price() -> Decimal {
        Decimal::from(1_000_000)
    }

    pub fn new(
        invoice_id: EntityId,
        description: String,
        quantity: i64,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: EntityId::default(),
            invoice_id,
            description,
            quantity,
            unit_price,
        }
    }

    /// quantity × unit price, full precision
    pub fn subtotal(&self) -> Result<Decimal, DomainError> {
        checked_product(Decimal::from(self.quantity), self.unit_price)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=Self::MAX_QUANTITY).contains(&self.quantity) {
            return Err(DomainError::InvalidQuantity(self.quantity));
        }
        if self.unit_price < Decimal::ZERO || self.unit_price > Self::max_unit_price() {
            return Err(DomainError::InvalidUnitPrice(self.unit_price));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "line description must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Invoice entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: EntityId,
    pub reservation_id: EntityId,
    pub issued_on: NaiveDate,
    /// Stored pre-discount amount of the stay
    pub amount: Decimal,
    pub discount: DiscountPercent,
    pub payment_method: PaymentMethod,
    pub status: InvoiceStatus,
    pub reservation: Option<Reservation>,
    pub lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// Calculator input for this invoice
    ///
    /// The room stay comes from the attached reservation; an invoice whose
    /// reservation has no booked rooms bills only its extra lines.
    pub fn draft(&self) -> Result<InvoiceDraft, DomainError> {
        let room_stay = match self
            .reservation
            .as_ref()
            .filter(|reservation| !reservation.lines.is_empty())
        {
            Some(reservation) => Some(RoomStay {
                range: reservation.range,
                nightly_rate: reservation.nightly_rate()?,
            }),
            None => None,
        };

        Ok(InvoiceDraft {
            room_stay,
            lines: self.lines.clone(),
            discount_percent: Some(self.discount.value()),
        })
    }
}
