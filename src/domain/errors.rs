//! Domain error types
//!
//! This module defines the error hierarchy for Agendei.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

use super::booking::BookingStatus;

/// Main Agendei error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AgendeiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input fails a validator predicate; recoverable, surfaced inline
    #[error("Validation error: {0}")]
    Validation(String),

    /// Booking store errors (local file or remote backend)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Booking store errors
///
/// Errors raised by `BookingStore` implementations. Transport variants
/// don't expose the HTTP client's types, only status and body text.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Operation targets a booking id that is not in the store
    #[error("Booking {id} not found")]
    NotFound { id: u64 },

    /// Operation targets a booking already in a terminal state
    #[error("Booking {id} is already {status} and cannot be modified")]
    TerminalState { id: u64, status: BookingStatus },

    /// Remote backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Transport { status: u16, message: String },

    /// Failed to reach the remote backend
    #[error("Failed to connect to booking backend: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the client-side timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Remote backend answered with a body that could not be decoded
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    /// Failed to persist the booking list
    #[error("Failed to write booking data: {0}")]
    WriteFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for AgendeiError {
    fn from(err: std::io::Error) -> Self {
        AgendeiError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AgendeiError {
    fn from(err: serde_json::Error) -> Self {
        AgendeiError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AgendeiError {
    fn from(err: toml::de::Error) -> Self {
        AgendeiError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout(err.to_string())
        } else if err.is_connect() {
            StoreError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            StoreError::InvalidResponse(err.to_string())
        } else {
            StoreError::ConnectionFailed(err.to_string())
        }
    }
}
