//! Startup configuration loading for the server binary

use tg_shared::{AppConfig, Environment, StoreBackend};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("built-in development JWT secrets are not allowed in {0}")]
    DefaultSecrets(Environment),

    #[error("the in-memory revocation store is not allowed in {0}")]
    MemoryStore(Environment),
}

/// Load `.env.<environment>` and then `.env`, and build the application config
///
/// Variables already set in the process environment win over both files.
pub fn load_config() -> AppConfig {
    let environment = Environment::from_env();
    // Missing files are normal outside development
    let _ = dotenvy::from_filename(environment.env_file());
    let _ = dotenvy::dotenv();

    AppConfig::from_env()
}

/// Refuse to start production with the development signing secrets or with a
/// process-local revocation store
pub fn check_config(config: &AppConfig) -> Result<(), StartupError> {
    if config.cache.backend == StoreBackend::Memory {
        if config.environment.is_production() {
            return Err(StartupError::MemoryStore(config.environment));
        }
        tracing::warn!(
            environment = %config.environment,
            "Using the in-memory revocation store; revocations are lost on restart"
        );
    }

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            return Err(StartupError::DefaultSecrets(config.environment));
        }
        tracing::warn!(
            environment = %config.environment,
            "Using built-in development JWT secrets"
        );
    }
    Ok(())
}
