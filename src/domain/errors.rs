//! Domain error types
//!
//! This module defines the error hierarchy for the LiveDDM client.
//! All errors are domain-specific and don't expose third-party types:
//! reqwest and serde_json failures are converted at the call site into
//! the variants below before they cross a module boundary.

use thiserror::Error;

/// Main client error type
///
/// This is the primary error type used throughout the crate. It wraps
/// the operation-specific error types and provides context for error
/// handling in callers and the CLI.
#[derive(Debug, Error)]
pub enum LiveDdmError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Vendor authentication errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Authenticated API call errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Serialization/deserialization errors outside an API response
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors produced by the vendor-key authentication exchange
///
/// A failed authentication never stores a credential; the caller decides
/// whether to re-invoke.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication request failed at the HTTP layer.
    ///
    /// `status` is present when the server answered with a non-success
    /// status and absent when the failure happened before a response
    /// arrived (connection refused, timeout).
    #[error("Authentication transport failure{}: {message}", fmt_status(.status))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    /// The server answered with a success status but the body did not
    /// decode as a credential, or decoded to an absent/empty token.
    #[error("Authentication response did not contain a usable token")]
    InvalidToken,
}

/// Errors produced by authenticated API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential is held; `authenticate` must run first and succeed.
    #[error("Not authenticated: call authenticate before issuing API requests")]
    Unauthenticated,

    /// The request failed at the HTTP layer.
    ///
    /// `status` is present when the server answered with a non-success
    /// status and absent when the failure happened before a response
    /// arrived (connection refused, timeout).
    #[error("Request transport failure{}: {message}", fmt_status(.status))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not the expected shape. No partial result
    /// is returned.
    #[error("Failed to decode response body: {0}")]
    DecodeFailure(String),
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for LiveDdmError {
    fn from(err: std::io::Error) -> Self {
        LiveDdmError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LiveDdmError {
    fn from(err: serde_json::Error) -> Self {
        LiveDdmError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LiveDdmError {
    fn from(err: toml::de::Error) -> Self {
        LiveDdmError::Configuration(format!("TOML parse error: {err}"))
    }
}
