//! Error types

mod app_error;

pub use app_error::{domain_details, domain_status, AppError, AppResult, ErrorResponse};
