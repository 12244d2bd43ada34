//! Thin authenticated HTTP client over the platform's REST API.

pub mod client;
pub mod dto;
pub mod error;

pub use client::{ApiClient, Session};
pub use error::ApiError;
