//! Error types for tmdb-films-core
//!
//! State transitions never fail. Errors only come from loading header
//! configuration.

use thiserror::Error;

/// Core error type for tmdb-films operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to parse header config: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl CoreError {
    /// Short hint shown next to the error in logs
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CoreError::ConfigParse { .. } => Some("Validate JSON syntax with: jq . header.json"),
            CoreError::InvalidConfig { field, .. } => match *field {
                "brandTitle" => Some("Set brandTitle to a non-empty string"),
                "menuOffsetY" => Some("Use a finite, non-negative number of pixels"),
                _ => Some("Use a whole number of pixels greater than zero"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
