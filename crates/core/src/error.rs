//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and storage layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is terminal for the single operation that produced it;
/// nothing in the stack retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested sale id is not present in the store.
    #[error("sale not found")]
    NotFound,

    /// A sale without an identifier was handed to the store.
    #[error("empty sale ID")]
    EmptyId,

    /// Creation was attempted without every required field.
    #[error("missing required fields: {0}")]
    MissingFields(String),

    /// Text did not name a known sale status.
    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

impl DomainError {
    pub fn missing_fields(msg: impl Into<String>) -> Self {
        Self::MissingFields(msg.into())
    }

    pub fn invalid_status(msg: impl Into<String>) -> Self {
        Self::InvalidStatus(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
