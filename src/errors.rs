/*!
 * Error types for the tuneme-translate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling a translation backend adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with provider credentials
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while processing a translation batch.
///
/// Per-item failures never produce a BatchError; the service converts those
/// into degraded results. Only failures of the batch machinery itself
/// surface here.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A worker task panicked or was cancelled
    #[error("Batch worker failed: {0}")]
    WorkerFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration operation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from an adapter
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// Error from batch processing
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
