//! Route handlers
//!
//! - `auth`: the session endpoints under `/api/auth`
//! - `resources`: demonstration endpoints showing public, authenticated and
//!   role-restricted access
//! - `health`: liveness plus a revocation store probe

pub mod auth;
pub mod health;
pub mod resources;
