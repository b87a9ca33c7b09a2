//! Core error types for the Adboard client.
//!
//! This module defines transport-agnostic error types. HTTP-specific details
//! (status codes, response bodies) are converted to these types by the
//! data-access layer.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the campaign dashboard client.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    #[error("API error: {0}")]
    Api(String),

    /// The request never produced a usable response (transport failure,
    /// unparseable body, client setup).
    #[error("Request failed: {0}")]
    Http(String),

    /// Client-side form validation failed; no request was sent.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A protected operation was attempted without an authenticated session.
    #[error("not signed in")]
    Unauthorized,

    /// Reading or writing the durable token store failed.
    #[error("Token store error: {0}")]
    TokenStore(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// A single per-field validation failure, shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "this field is required")
    }
}

/// The collected outcome of running a form's rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
