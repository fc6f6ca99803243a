//! Error types for mastoclient.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, transport, protocol, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for mastoclient operations.
///
/// Callers can match on the variant to tell a missing credential apart from
/// a failed request.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration field was not set.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The instance answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (instance URL, redirect URI).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// A credential field required by every network operation is missing.
///
/// Fields are checked in declaration order, so the first missing one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no instance configured")]
    MissingInstance,

    #[error("no client key configured")]
    MissingClientKey,

    #[error("no client secret configured")]
    MissingClientSecret,

    #[error("no access token configured")]
    MissingAccessToken,
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error returned by the instance in a non-success response.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// The `error` field of the response body, if present.
    pub error: Option<String>,
    /// The OAuth `error_description` field, if present.
    pub description: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, ": {}", error)?;
        }
        if let Some(ref description) = self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, description: Option<String>) -> Self {
        Self {
            status,
            error,
            description,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.error.as_deref() == Some("invalid_grant")
            || self.error.as_deref() == Some("invalid_client")
            || self.error.as_deref() == Some("The access token is invalid")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid instance URL.
    #[error("invalid instance URL '{value}': {reason}")]
    InstanceUrl { value: String, reason: String },

    /// Invalid redirect URI.
    #[error("invalid redirect URI '{value}': {reason}")]
    RedirectUri { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
