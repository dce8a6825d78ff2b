//! Error types for the chain harness
//!
//! Case-level failures are not errors: a failed or errored case becomes a
//! report entry, never an `Err` out of a run. These types cover everything
//! else - configuration, transport plumbing, serialization.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the chain harness
#[derive(Error, Debug)]
pub enum Error {
    // === Invocation Errors ===
    #[error("Invocation of '{function}' failed: {message}")]
    Invoke { function: String, message: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invocation error carrying the transport's message
    pub fn invoke(function: &str, message: impl Into<String>) -> Self {
        Self::Invoke {
            function: function.to_string(),
            message: message.into(),
        }
    }
}
