//! Request-scoped identity
//!
//! A [`Session`] is built from the caller's backend token for every request
//! and passed explicitly to each service operation.

use chrono::{DateTime, Utc};
use hospeda_common::Claims;
use hospeda_core::{AccessToken, Capabilities, DomainError, EntityId, StaffRole};

use super::error::ServiceResult;

/// Authenticated staff member for one request
#[derive(Debug, Clone)]
pub struct Session {
    user_id: Option<EntityId>,
    email: Option<String>,
    username: Option<String>,
    role: StaffRole,
    token: AccessToken,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from a decoded token
    pub fn from_claims(token: AccessToken, claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id(),
            email: claims.email.clone(),
            username: claims.username.clone(),
            role: claims.rol,
            token,
            expires_at: claims.expires_at(),
        }
    }

    pub fn user_id(&self) -> Option<EntityId> {
        self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.username()
            .or_else(|| self.email())
            .unwrap_or("User")
    }

    pub fn role(&self) -> StaffRole {
        self.role
    }

    /// Backend token forwarded on every repository call
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }

    /// Fail with `MissingCapability` unless every flag in `required` is held
    pub fn require(&self, required: Capabilities) -> ServiceResult<()> {
        if self.capabilities().has(required) {
            Ok(())
        } else {
            let missing = required.difference(self.capabilities());
            Err(DomainError::MissingCapability(missing.list().join(", ")).into())
        }
    }
}
