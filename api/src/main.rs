use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tg_api::config::{check_config, load_config};
use tg_api::middleware::create_cors;
use tg_api::{configure, AppState};
use tg_core::{RevocationStore, SessionService, SystemClock, TokenService, TokenServiceConfig};
use tg_infra::{InMemoryRevocationStore, RedisClient, RedisRevocationStore, StaticUserRepository};
use tg_shared::config::LogFormat;
use tg_shared::{AppConfig, LoggingConfig, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging);
    check_config(&config)?;

    tracing::info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Tollgate"
    );

    let token_config =
        TokenServiceConfig::from_jwt_config(&config.jwt).context("invalid JWT configuration")?;

    match config.cache.backend {
        StoreBackend::Redis => {
            let redis = RedisClient::new(&config.cache)
                .await
                .context("failed to connect to the revocation store")?;
            serve(&config, token_config, RedisRevocationStore::new(redis)).await
        }
        StoreBackend::Memory => {
            serve(&config, token_config, InMemoryRevocationStore::new()).await
        }
    }
}

/// Build the session service over `store` and run the HTTP server until shutdown
async fn serve<S>(
    config: &AppConfig,
    token_config: TokenServiceConfig,
    store: S,
) -> anyhow::Result<()>
where
    S: RevocationStore + 'static,
{
    tracing::info!(backend = %config.cache.backend, "Revocation store ready");

    let token_service = Arc::new(
        TokenService::new(store, token_config).context("failed to build the token service")?,
    );
    let directory = Arc::new(StaticUserRepository::demo());
    let session_service = SessionService::new(directory, token_service);

    let state = web::Data::new(AppState::new(session_service));
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();

    tracing::info!(address = %bind_address, "Server listening");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(create_cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(configure::<StaticUserRepository, S, SystemClock>)
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}
