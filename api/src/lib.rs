//! # Tollgate API
//!
//! actix-web layer over the session service: request DTOs and validation, the
//! mapping from domain errors to HTTP responses, bearer token extraction, CORS and
//! the route table.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure, AppState};
