//! Shared configuration and response types for the Tollgate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (JWT secrets and lifetimes, Redis, HTTP server, logging)
//! - The error body returned across the HTTP boundary
//! - Health check response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CorsConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
    StoreBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
