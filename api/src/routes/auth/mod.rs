//! Session route handlers
//!
//! This module contains the endpoints under `/api/auth`:
//! - Login with email and password
//! - Access token verification
//! - Token refresh
//! - Logout
//! - Principal lookup from an access token

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod verify;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use refresh::refresh;
pub use verify::verify;
