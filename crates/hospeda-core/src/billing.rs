//! Invoice total calculator
//!
//! `subtotal = nights × nightly rate + Σ quantity × unit price`,
//! `discount = subtotal × percent / 100`, `total = subtotal − discount`.
//! Everything is computed at full decimal precision; rounding to cents
//! happens only when totals are presented.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::entities::InvoiceLine;
use crate::error::DomainError;
use crate::value_objects::{DateRange, DiscountPercent};

/// Decimal places shown to users
pub const DISPLAY_SCALE: u32 = 2;

/// Error for arithmetic that leaves the representable decimal range
pub(crate) fn out_of_range() -> DomainError {
    DomainError::ValidationError("amount out of range".to_string())
}

/// `a × b`, failing instead of overflowing
pub(crate) fn checked_product(a: Decimal, b: Decimal) -> Result<Decimal, DomainError> {
    a.checked_mul(b).ok_or_else(out_of_range)
}

/// Sum of `amounts`, failing instead of overflowing
pub(crate) fn checked_sum<I>(amounts: I) -> Result<Decimal, DomainError>
where
    I: IntoIterator<Item = Result<Decimal, DomainError>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount?).ok_or_else(out_of_range)
    })
}

/// Nights spent at a fixed nightly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStay {
    pub range: DateRange,
    pub nightly_rate: Decimal,
}

impl RoomStay {
    /// nights × rate; an empty or inverted range is an error
    pub fn subtotal(&self) -> Result<Decimal, DomainError> {
        let nights = self.range.nights()?;
        checked_product(Decimal::from(nights), self.nightly_rate)
    }
}

/// Calculator input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvoiceDraft {
    pub room_stay: Option<RoomStay>,
    pub lines: Vec<InvoiceLine>,
    /// Absent means 0 %
    pub discount_percent: Option<Decimal>,
}

/// Calculator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    /// Totals rounded half away from zero to cents
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_for_display(self.subtotal),
            discount_amount: round_for_display(self.discount_amount),
            total: round_for_display(self.total),
        }
    }
}

/// Round to two decimals, halves away from zero, always carrying two places
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Compute subtotal, discount and total for an invoice draft
pub fn compute_total(draft: &InvoiceDraft) -> Result<InvoiceTotals, DomainError> {
    let discount = DiscountPercent::from_optional(draft.discount_percent)?;

    let stay = match &draft.room_stay {
        Some(stay) => stay.subtotal()?,
        None => Decimal::ZERO,
    };
    let extras = checked_sum(draft.lines.iter().map(InvoiceLine::subtotal))?;

    let subtotal = stay.checked_add(extras).ok_or_else(out_of_range)?;
    let discount_amount = discount.apply_to(subtotal).ok_or_else(out_of_range)?;

    Ok(InvoiceTotals {
        subtotal,
        discount_amount,
        total: subtotal
            .checked_sub(discount_amount)
            .ok_or_else(out_of_range)?,
    })
}
