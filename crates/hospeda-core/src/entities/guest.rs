//! Guest entity - a hotel customer

use chrono::NaiveDate;

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Guest entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub identity_document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub registered_on: Option<NaiveDate>,
}

impl Guest {
    /// Name as printed on receipts
    pub fn full_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            ("", "") => "-".to_string(),
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{first} {last}"),
        }
    }

    /// Names and identity document are required
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("identity document", &self.identity_document),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::ValidationError(format!("{field} is required")));
            }
        }
        Ok(())
    }
}
