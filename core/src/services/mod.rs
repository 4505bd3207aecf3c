//! Business services containing the token lifecycle and session use cases.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::SessionService;
pub use token::{
    Clock, LogoutOutcome, ManualClock, SystemClock, TokenCodec, TokenService, TokenServiceConfig,
};
