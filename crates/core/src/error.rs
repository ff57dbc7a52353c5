//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (parsing, validation,
/// invariants). Transport and manager concerns live in the queue layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw string is not a member of a closed enumerated set.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A ticket failed to parse (tickets are UUID strings).
    #[error("invalid ticket: {0}")]
    InvalidTicket(String),

    /// A value failed validation (e.g. blank where non-blank is required).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_ticket(msg: impl Into<String>) -> Self {
        Self::InvalidTicket(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
