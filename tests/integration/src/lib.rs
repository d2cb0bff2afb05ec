//! Integration test utilities for the Hospeda+ console
//!
//! Runs the API server against an in-process stand-in for the hotel
//! backend and drives it over HTTP.

pub mod fake_backend;
pub mod fixtures;
pub mod helpers;

pub use fake_backend::FakeBackend;
pub use fixtures::*;
pub use helpers::*;
