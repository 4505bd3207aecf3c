//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The revocation store failed or timed out; never means "not found"
    #[error("Revocation store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// Invalid signing keys or other startup configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        DomainError::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, DomainError::StoreUnavailable { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
