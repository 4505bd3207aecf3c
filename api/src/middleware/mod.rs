pub mod auth;
pub mod cors;

pub use auth::{extract_bearer_token, BearerToken};
pub use cors::create_cors;
