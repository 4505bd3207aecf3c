//! # Tollgate Core
//!
//! Token lifecycle engine for the Tollgate server: principals and claim sets, the
//! revocation store and principal directory contracts, the token codec and lifecycle
//! service, and the session facade the HTTP layer calls into.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AccessClaims, AuthResponse, ClaimSet, LoginCredentials, Principal, RefreshClaims, TokenKind,
    TokenPair,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{blacklist_key, refresh_key, RevocationStore, UserRepository};
pub use services::{
    Clock, LogoutOutcome, ManualClock, SessionService, SystemClock, TokenCodec, TokenService,
    TokenServiceConfig,
};
