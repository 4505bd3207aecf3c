//! Authentication and token error types
//!
//! Display strings are for logs. The HTTP layer maps each variant to a coarse code
//! and message before anything reaches a client.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not verify against the key for this token kind
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    /// Cryptographically valid but revoked at logout
    #[error("Token blacklisted")]
    Blacklisted,

    /// Not the subject's current refresh token, or unusable for refresh
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Collapsed form of any access token rejection, used at the session boundary
    #[error("Invalid token")]
    InvalidToken,

    /// Not a compact token, or the payload does not match the claim set
    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
