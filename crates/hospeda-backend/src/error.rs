//! Backend error handling
//!
//! Maps HTTP failures from the hotel backend onto `DomainError`.

use hospeda_core::error::DomainError;
use hospeda_core::value_objects::EntityId;
use serde::Deserialize;
use serde_json::Value;

/// Message the backend sends when a reservation is already invoiced
const DUPLICATE_INVOICE_MARKER: &str = "Ya existe una factura para la reserva";

/// Error body returned by the backend
///
/// `message` is a string, or a list of strings for validation failures.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub id_factura: Option<EntityId>,
}

impl ErrorBody {
    /// Parse a raw body; anything that is not JSON becomes the message
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            message: (!raw.trim().is_empty()).then(|| Value::String(raw.trim().to_string())),
            ..Self::default()
        })
    }

    pub fn message_text(&self) -> Option<String> {
        let text = match self.message.as_ref() {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        };
        text.filter(|s| !s.is_empty())
            .or_else(|| self.error.clone())
    }
}

/// Failure talking to the hotel backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        invoice_id: Option<EntityId>,
    },

    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected backend payload: {0}")]
    Decode(String),
}

impl BackendError {
    /// Build a status error from a non-success response body
    pub fn from_status(status: u16, raw_body: &str) -> Self {
        let body = ErrorBody::parse(raw_body);
        Self::Status {
            status,
            message: body
                .message_text()
                .unwrap_or_else(|| format!("Error {status}")),
            invoice_id: body.id_factura,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether this is the backend's duplicate invoice rejection
    pub fn is_duplicate_invoice(&self) -> bool {
        match self {
            Self::Status {
                status, message, ..
            } => *status == 409 || message.contains(DUPLICATE_INVOICE_MARKER),
            _ => false,
        }
    }

    /// Invoice id the backend reported for a duplicate
    pub fn invoice_id(&self) -> Option<EntityId> {
        match self {
            Self::Status { invoice_id, .. } => *invoice_id,
            _ => None,
        }
    }
}

impl From<BackendError> for DomainError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Status {
                status, message, ..
            } => match status {
                401 => DomainError::SessionExpired,
                403 => DomainError::Forbidden,
                404 => DomainError::ResourceNotFound(message),
                409 => DomainError::Conflict(message),
                400..=499 => DomainError::BackendRejected(message),
                _ => DomainError::BackendUnavailable(message),
            },
            BackendError::Transport(e) => DomainError::BackendUnavailable(e.to_string()),
            BackendError::Decode(msg) => DomainError::InternalError(msg),
        }
    }
}

/// Convert a backend error to a domain error
pub fn map_backend_error(e: BackendError) -> DomainError {
    e.into()
}
