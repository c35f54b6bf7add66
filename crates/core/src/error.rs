//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic failures live here (bad input, unknown currencies).
/// Network and upstream failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-finite amount or rate).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A currency code is malformed or absent from the rate table.
    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode(code.into())
    }
}
