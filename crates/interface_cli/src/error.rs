//! CLI error handling

use thiserror::Error;

use domain_party::EnrollmentError;

/// Errors raised while reading a submission
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed submission: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Enrollment error: {0}")]
    Enrollment(#[from] EnrollmentError),
}
