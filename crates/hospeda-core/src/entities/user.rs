//! User entity - a console staff account

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{EntityId, StaffRole};

/// Staff account managed through the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub role: StaffRole,
    pub last_access: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: String, email: String, role: StaffRole) -> Self {
        Self {
            id: EntityId::default(),
            username,
            email,
            role,
            last_access: None,
        }
    }

    /// Whether the user has logged in at or after `since`
    pub fn active_since(&self, since: DateTime<Utc>) -> bool {
        self.last_access.is_some_and(|at| at >= since)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username.trim().is_empty() {
            return Err(DomainError::ValidationError("username is required".to_string()));
        }
        Ok(())
    }
}
