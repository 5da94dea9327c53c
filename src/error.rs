//! Error types for the mobile navigation toggle

use thiserror::Error;

/// Main error type for wiring the navigation toggle
#[derive(Error, Debug)]
pub enum NavError {
    #[error("No element matches selector '{selector}'")]
    MissingElement { selector: String },

    #[error("Invalid navigation config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl NavError {
    pub fn missing(selector: impl Into<String>) -> Self {
        NavError::MissingElement {
            selector: selector.into(),
        }
    }
}

/// Result type for navigation toggle operations
pub type NavResult<T> = Result<T, NavError>;
