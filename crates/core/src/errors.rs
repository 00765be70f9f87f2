//! Core error types for the FinPal calculation layer.
//!
//! Every failure in this crate is a caller-side contract violation. There
//! are no transient or retryable errors: the core performs no I/O, so
//! nothing here is worth recovering from internally.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for user input and catalog lookups.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl Error {
    /// Shorthand for the InvalidInput condition raised when a numeric
    /// argument or lookup key violates its documented constraint.
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(msg.into()))
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Error::Validation(ValidationError::MissingField(field.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
