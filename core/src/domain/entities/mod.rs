//! Domain entities representing authenticated principals and token claim sets.

pub mod principal;
pub mod token;

// Re-export commonly used types
pub use principal::Principal;
pub use token::{
    AccessClaims, ClaimSet, RefreshClaims, TokenKind, TokenPair,
    DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS,
};
