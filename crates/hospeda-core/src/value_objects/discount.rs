//! Discount percentage applied to an invoice subtotal

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Percentage in `0..=100`; an absent discount is 0 %
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validate and wrap a percentage
    pub fn new(percent: Decimal) -> Result<Self, DomainError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidDiscount(percent));
        }
        Ok(Self(percent))
    }

    /// Treat a missing value as zero
    pub fn from_optional(percent: Option<Decimal>) -> Result<Self, DomainError> {
        percent.map_or(Ok(Self::ZERO), Self::new)
    }

    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Portion of `amount` removed by this discount, full precision
    ///
    /// `None` when the product leaves the decimal range.
    pub fn apply_to(&self, amount: Decimal) -> Option<Decimal> {
        amount
            .checked_mul(self.0)
            .map(|scaled| scaled / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

impl<'de> Deserialize<'de> for DiscountPercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        DiscountPercent::new(raw).map_err(serde::de::Error::custom)
    }
}
