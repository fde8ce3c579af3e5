//! Error types for the Jisho/AnkiConnect clients.
//!
//! Uses `thiserror` for structured error definitions. A non-200 status is never
//! an error value here: each operation logs it and degrades to a partial or
//! empty result instead.

use thiserror::Error;

/// Error type for the text helpers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextError {
    /// Input was not exactly one character
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Error type for AnkiConnect operations.
#[derive(Error, Debug)]
pub enum AnkiError {
    /// Connection, DNS or timeout failure
    #[error("AnkiConnect request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Malformed AnkiConnect response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Configured address is not a usable URL
    #[error("Invalid AnkiConnect address: {0}")]
    InvalidUrl(String),

    /// Client settings failed validation
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// AnkiConnect reported an error for the action
    #[error("AnkiConnect error: {0}")]
    Action(String),
}

/// Error type for Jisho lookups.
#[derive(Error, Debug)]
pub enum JishoError {
    /// Connection, DNS or timeout failure
    #[error("Jisho request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Input failed a precondition; raised before any request is made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A 200 response whose JSON body could not be decoded
    #[error("Malformed Jisho response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// An element the page contract requires is missing
    #[error("Page structure mismatch: {0}")]
    StructuralMismatch(String),

    /// URL building failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client settings failed validation
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl From<TextError> for JishoError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::InvalidArgument(msg) => JishoError::InvalidArgument(msg),
        }
    }
}

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory not found
    #[error("Could not determine config directory")]
    NoConfigDir,
}
