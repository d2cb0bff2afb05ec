//! Stay date range - half-open `[check_in, check_out)` over calendar dates
//!
//! Time of day never participates: the backend sends dates either as plain
//! `YYYY-MM-DD` or as RFC 3339 timestamps, and both collapse to the date.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Half-open range of nights; `check_out` is the departure day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Build a range without validating it
    ///
    /// Backend data is taken as-is; use [`DateRange::is_valid`] before
    /// trusting it.
    pub const fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Build a range, rejecting `check_in >= check_out`
    pub fn new_checked(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, DomainError> {
        let range = Self::new(check_in, check_out);
        if range.is_valid() {
            Ok(range)
        } else {
            Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            })
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.check_in < self.check_out
    }

    /// Number of nights in the stay
    pub fn nights(&self) -> Result<u32, DomainError> {
        if !self.is_valid() {
            return Err(DomainError::InvalidStayRange {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days)
            .map_err(|_| DomainError::ValidationError(format!("stay of {days} nights is too long")))
    }

    /// Half-open overlap: abutting ranges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    // "2024-05-01T00:00:00" without offset, or longer strings with a date prefix
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Serde helper accepting plain dates or timestamps
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Optional variant of [`deserialize_calendar_date`]; blank strings become `None`
pub fn deserialize_optional_calendar_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {value}"))),
    }
}
