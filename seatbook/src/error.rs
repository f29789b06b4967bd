//! Error types for the seatbook library.
//!
//! This module provides the error hierarchy for all reservation store
//! operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a seatbook error.
///
/// # Examples
///
/// ```
/// use seatbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the seatbook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Another reservation already holds the same name, time and seats.
    #[error("duplicate reservation: {details}")]
    DuplicateReservation {
        /// Details about the conflicting reservation.
        details: String,
    },

    /// The requested reservation was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// No id is left to assign.
    #[error("no reservation ids left after {last}")]
    IdsExhausted {
        /// The highest id already in use.
        last: u32,
    },

    /// A stored or imported line could not be turned into a reservation.
    #[error("invalid record: {reason}")]
    InvalidRecord {
        /// Why the line was rejected.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file exists but could not be read.
    #[error("cannot read configuration file {}: {reason}", path.display())]
    ConfigurationFile {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying failure.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a not-found condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a duplicate-key rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Error;
    ///
    /// let err = Error::DuplicateReservation { details: "Tanaka".to_string() };
    /// assert!(err.is_duplicate());
    /// ```
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateReservation { .. })
    }
}
