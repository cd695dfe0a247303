//! Core error types for the Roomly marketplace.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage
//! layer.

use rust_decimal::Decimal;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the marketplace core.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic. Only `Database` errors are eligible for caller-directed
/// retry; every other category reports a definitive outcome.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether the failure came from the persistence collaborator and may
    /// succeed on retry. Validation, not-found, conflict, and
    /// insufficient-funds outcomes are definitive and must not be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Database(_))
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_only_database_errors_are_retryable() {
        assert!(Error::Database(DatabaseError::QueryFailed("timeout".into())).is_retryable());
        assert!(!Error::NotFound("request abc".into()).is_retryable());
        assert!(!Error::Conflict("duplicate proposal".into()).is_retryable());
        assert!(!Error::InsufficientFunds {
            requested: dec!(10),
            available: dec!(5),
        }
        .is_retryable());
        assert!(
            !Error::Validation(ValidationError::InvalidInput("bad".into())).is_retryable()
        );
    }
}
