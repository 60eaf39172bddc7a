//! Enrollment domain errors
//!
//! These are caller errors: bad configuration, unknown field names, writes to
//! a field the record variant does not have. Invalid user input is never an
//! `EnrollmentError`; it is reported as `FieldErrors` from the validators.

use thiserror::Error;

use core_kernel::temporal::TemporalError;

/// Errors that can occur in the enrollment domain
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// Rule or slot configuration that can never be satisfied
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration could not be loaded from its sources
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Date bounds could not be built
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Field name not known to any record schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field exists but not on this record variant
    #[error("Field {field} does not exist on the {variant} record")]
    FieldNotInVariant { field: String, variant: String },

    /// Literal outside a closed choice set
    #[error("Unknown {field} value: {value}")]
    UnknownChoice { field: String, value: String },

    /// Upload slot index past the configured capacity
    #[error("Upload slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    /// The message catalog failed to parse
    #[error("Message catalog error: {0}")]
    Messages(String),
}

impl EnrollmentError {
    /// Creates an InvalidConfiguration error with a message
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        EnrollmentError::InvalidConfiguration(message.into())
    }

    /// Creates an UnknownChoice error
    pub fn unknown_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        EnrollmentError::UnknownChoice {
            field: field.into(),
            value: value.into(),
        }
    }
}
