//! Common error types and handling for the Deriv client utilities

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type shared across the utility crates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Get the error code for host-application reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}
