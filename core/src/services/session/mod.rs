//! Session facade module
//!
//! The operations the HTTP layer calls: login, verify, refresh, logout, who-am-i,
//! plus role-based authorization of a bearer token.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
