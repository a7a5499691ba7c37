//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::AvailabilityError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to slot availability conflicts
    #[error(transparent)]
    Availability(#[from] AvailabilityError),
}

pub type DomainResult<T> = Result<T, DomainError>;
