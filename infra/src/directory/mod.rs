//! Principal directory implementations

pub mod static_user_repository;

pub use static_user_repository::StaticUserRepository;
