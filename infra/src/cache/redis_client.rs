//! Redis client for the revocation store
//!
//! Multiplexed async connection shared by all callers, exponential-backoff retries
//! on transient errors, and a deadline on every call so a hung server surfaces as an
//! error instead of a stalled request.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use tg_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Upper bound for the backoff delay between attempts
const MAX_RETRY_DELAY_MS: u64 = 1_000;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Redis client with connection multiplexing, retries and per-call timeouts
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Maximum number of attempts per operation
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
    /// Deadline for a single attempt
    response_timeout_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Ok(RedisClient)` - Connected client
    /// * `Err(InfrastructureError::Config)` - The URL could not be parsed
    /// * `Err(InfrastructureError::Cache | Timeout)` - No connection after all attempts
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        info!(url = %mask_url(&config.url), "Creating Redis client");

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let max_retries = config.max_retries.max(1);
        let connection = Self::create_connection_with_retry(
            client,
            max_retries,
            config.retry_delay_ms,
            config.connection_timeout_ms,
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            max_retries,
            retry_delay_ms: config.retry_delay_ms,
            response_timeout_ms: config.response_timeout_ms.max(1),
        })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
        connection_timeout_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;
        let deadline = Duration::from_millis(connection_timeout_ms.max(1));

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let failure = match timeout(deadline, client.get_multiplexed_async_connection()).await {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) => InfrastructureError::Cache(e),
                Err(_) => InfrastructureError::Timeout(connection_timeout_ms),
            };

            if attempts >= max_retries {
                error!("Failed to connect to Redis after {} attempts: {}", attempts, failure);
                return Err(failure);
            }

            warn!(
                "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, max_retries, failure, delay
            );
            sleep(Duration::from_millis(delay)).await;
            delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
        }
    }

    /// Set a value with expiration time (`SET key value EX seconds`)
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!(key = %mask_key(key), expiry_seconds, "Setting key");

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            let value = value.to_string();

            Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await })
        })
        .await
        .map_err(|e| {
            error!(key = %mask_key(key), "Failed to set key: {}", e);
            e
        })
    }

    /// Get a value, `None` if the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!(key = %mask_key(key), "Getting key");

        let value = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.get::<_, Option<String>>(key).await })
            })
            .await
            .map_err(|e| {
                error!(key = %mask_key(key), "Failed to get key: {}", e);
                e
            })?;

        debug!(key = %mask_key(key), found = value.is_some(), "Get completed");
        Ok(value)
    }

    /// Delete a key, returning `true` if it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!(key = %mask_key(key), "Deleting key");

        let deleted_count = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await
            .map_err(|e| {
                error!(key = %mask_key(key), "Failed to delete key: {}", e);
                e
            })?;

        Ok(deleted_count > 0)
    }

    /// Check if a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!(key = %mask_key(key), "Checking key existence");

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();

            Box::pin(async move { conn.exists::<_, bool>(key).await })
        })
        .await
        .map_err(|e| {
            error!(key = %mask_key(key), "Failed to check key existence: {}", e);
            e
        })
    }

    /// Get time-to-live for a key
    ///
    /// # Returns
    /// * `Ok(Some(seconds))` - Key exists with an expiry
    /// * `Ok(None)` - Key doesn't exist or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let ttl = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.ttl::<_, i64>(key).await })
            })
            .await?;

        Ok((ttl >= 0).then_some(ttl))
    }

    /// Check if the Redis connection is healthy (`PING`)
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await?;

        if response == "PONG" {
            Ok(true)
        } else {
            warn!("Redis health check returned unexpected response: {}", response);
            Ok(false)
        }
    }

    /// Execute a Redis operation with a per-attempt deadline and retries
    ///
    /// Transient errors and timeouts are retried with exponential backoff; any other
    /// error is returned immediately. Every command issued through here is idempotent.
    async fn execute_with_retry<F, T>(&self, operation: F) -> Result<T, InfrastructureError>
    where
        F: Fn(MultiplexedConnection) -> RedisFuture<T>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;
        let deadline = Duration::from_millis(self.response_timeout_ms);

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            let failure = match timeout(deadline, operation(conn)).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) if is_retriable_error(&e) => InfrastructureError::Cache(e),
                Ok(Err(e)) => return Err(InfrastructureError::Cache(e)),
                Err(_) => InfrastructureError::Timeout(self.response_timeout_ms),
            };

            if attempts >= self.max_retries {
                error!("Redis operation failed after {} attempts: {}", attempts, failure);
                return Err(failure);
            }

            warn!(
                "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                attempts, self.max_retries, failure, delay
            );
            sleep(Duration::from_millis(delay)).await;
            delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
        }
    }
}

/// Check if a Redis error is transient and the operation should be retried
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}

/// Render a key for logging without the raw token it may embed
pub(crate) fn mask_key(key: &str) -> String {
    match key.split_once(':') {
        Some((namespace, rest)) => {
            format!("{}:...{}", namespace, tg_core::services::token::token_fingerprint(rest))
        }
        None => tg_core::services::token::token_fingerprint(key),
    }
}
