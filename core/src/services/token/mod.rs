//! Token lifecycle module
//!
//! - Clock abstraction so every operation checks expiry against one instant
//! - HS256 signing keys, one per token kind
//! - Token codec for the compact signed wire format
//! - Lifecycle service: issuance, validation, rotation, logout

mod clock;
mod codec;
mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{token_fingerprint, TokenCodec};
pub use config::TokenServiceConfig;
pub use key_manager::{SigningKey, SigningKeys};
pub use service::{LogoutOutcome, TokenService};
