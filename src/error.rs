// src/error.rs

//! Unified error handling for the feed generator.

use thiserror::Error;

/// Result type alias for feed generator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure or non-success response status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Feed serialization failed
    #[error("Feed serialization error: {0}")]
    Feed(#[from] atom_syndication::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Expected bulletin content block missing from a fetched page
    #[error("Extract error: {0}")]
    Extract(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an extraction error.
    pub fn extract(message: impl Into<String>) -> Self {
        Self::Extract(message.into())
    }
}
