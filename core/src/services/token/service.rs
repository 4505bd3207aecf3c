//! Token lifecycle manager: issuance, validation, rotation and revocation

use constant_time_eq::constant_time_eq;
use tracing::{debug, error, info, warn};

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{AccessClaims, ClaimSet, RefreshClaims, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::revocation::{
    blacklist_key, refresh_key, RevocationStore, BLACKLIST_MARKER,
};
use crate::repositories::UserRepository;

use super::clock::{Clock, SystemClock};
use super::codec::{token_fingerprint, TokenCodec};
use super::config::TokenServiceConfig;
use super::key_manager::SigningKeys;

/// What a logout actually changed in the revocation store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// The access token was added to the blacklist
    pub blacklisted: bool,
    /// A stored refresh token was removed
    pub refresh_revoked: bool,
}

/// Service for issuing, validating, rotating and revoking session tokens
///
/// Immutable after construction; share it behind an `Arc`. The revocation store is
/// the only mutable state and is owned by the store implementation.
pub struct TokenService<S: RevocationStore, C: Clock = SystemClock> {
    pub(crate) store: S,
    codec: TokenCodec,
    config: TokenServiceConfig,
    clock: C,
}

impl<S: RevocationStore> TokenService<S, SystemClock> {
    /// Creates a new token service using the system clock
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store for blacklist and refresh entries
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or an error if the configuration is invalid
    pub fn new(store: S, config: TokenServiceConfig) -> DomainResult<Self> {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: RevocationStore, C: Clock> TokenService<S, C> {
    /// Creates a new token service with an explicit clock
    pub fn with_clock(store: S, config: TokenServiceConfig, clock: C) -> DomainResult<Self> {
        config.validate()?;
        let keys = SigningKeys::new(&config.access_secret, &config.refresh_secret)?;

        Ok(Self {
            store,
            codec: TokenCodec::new(keys),
            config,
            clock,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issues a new token pair for a principal
    ///
    /// The refresh token is stored as the subject's single current refresh token,
    /// superseding any earlier one. A blacklist entry for the identical access token
    /// is removed, since re-authentication revives that credential.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError::StoreUnavailable)` - The refresh token could not be stored
    pub async fn issue_pair(&self, principal: &Principal) -> DomainResult<TokenPair> {
        let now = self.clock.now();
        self.issue_pair_at(principal, now).await
    }

    async fn issue_pair_at(&self, principal: &Principal, now: i64) -> DomainResult<TokenPair> {
        let access_claims =
            AccessClaims::for_principal(principal, now, self.config.access_ttl_seconds);
        let refresh_claims =
            RefreshClaims::for_subject(&principal.id, now, self.config.refresh_ttl_seconds);

        let access_token = self.codec.encode(&access_claims)?;
        let refresh_token = self.codec.encode(&refresh_claims)?;

        self.store
            .set(
                &refresh_key(&principal.id),
                &refresh_token,
                self.config.refresh_ttl_seconds as u64,
            )
            .await?;

        // Claims are second-granular, so a pair issued in the same second as a
        // logout is byte-identical to the token that logout blacklisted.
        let revoked = blacklist_key(&access_token);
        if self.store.exists(&revoked).await? {
            self.store.delete(&revoked).await?;
            debug!(
                subject = %principal.id,
                access = %token_fingerprint(&access_token),
                "Cleared blacklist entry for reissued access token"
            );
        }

        info!(
            subject = %principal.id,
            access = %token_fingerprint(&access_token),
            refresh = %token_fingerprint(&refresh_token),
            "Issued token pair"
        );

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Checks an access token against the blacklist and verifies it
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The token is valid
    /// * `Err(TokenError::Blacklisted)` - The token was revoked at logout
    /// * `Err(TokenError::InvalidSignature | Expired | InvalidTokenFormat)` - Decode failed
    /// * `Err(DomainError::StoreUnavailable)` - The blacklist could not be consulted
    pub async fn check_access_token(&self, token: &str) -> DomainResult<AccessClaims> {
        let now = self.clock.now();

        if self.store.exists(&blacklist_key(token)).await? {
            debug!(token = %token_fingerprint(token), "Access token is blacklisted");
            return Err(TokenError::Blacklisted.into());
        }

        Ok(self.codec.decode::<AccessClaims>(token, now)?)
    }

    /// Returns `true` only for a valid, non-blacklisted access token
    ///
    /// Every failure, including an unreachable store, yields `false`.
    pub async fn validate_access_token(&self, token: &str) -> bool {
        match self.check_access_token(token).await {
            Ok(_) => true,
            Err(e) if e.is_store_unavailable() => {
                warn!(error = %e, "Rejecting access token, revocation store unavailable");
                false
            }
            Err(e) => {
                debug!(token = %token_fingerprint(token), reason = %e, "Access token rejected");
                false
            }
        }
    }

    /// Validates a refresh token against the subject's stored refresh token
    ///
    /// The stored value is compared before the token is decoded, so a superseded
    /// token is rejected even while its signature and expiry are still good.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshClaims)` - The token is the subject's current refresh token
    /// * `Err(TokenError::InvalidRefreshToken)` - Absent, superseded, or undecodable
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be consulted
    pub async fn validate_refresh_token(
        &self,
        token: &str,
        subject_id: &str,
    ) -> DomainResult<RefreshClaims> {
        let now = self.clock.now();
        self.validate_refresh_at(token, subject_id, now).await
    }

    async fn validate_refresh_at(
        &self,
        token: &str,
        subject_id: &str,
        now: i64,
    ) -> DomainResult<RefreshClaims> {
        let stored = self.store.get(&refresh_key(subject_id)).await?;

        let matches = stored
            .as_deref()
            .map(|s| constant_time_eq(s.as_bytes(), token.as_bytes()))
            .unwrap_or(false);
        if !matches {
            debug!(subject = %subject_id, "Refresh token does not match stored token");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        self.codec
            .decode::<RefreshClaims>(token, now)
            .map_err(|e| {
                debug!(subject = %subject_id, reason = %e, "Stored refresh token failed to decode");
                TokenError::InvalidRefreshToken.into()
            })
    }

    /// Verifies a refresh token's signature and expiry without consulting the store
    ///
    /// Used to recover the subject before the stored-token check.
    pub fn verify_refresh_token(&self, token: &str) -> DomainResult<RefreshClaims> {
        let now = self.clock.now();
        self.codec
            .decode::<RefreshClaims>(token, now)
            .map_err(|_| TokenError::InvalidRefreshToken.into())
    }

    /// Rotates a refresh token into a new token pair
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The presented refresh token
    /// * `users` - Directory used to resolve the subject's current profile
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair; the presented refresh token is superseded
    /// * `Err(TokenError::InvalidRefreshToken)` - Token unusable or subject unknown
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be consulted
    pub async fn refresh_tokens<U>(&self, refresh_token: &str, users: &U) -> DomainResult<TokenPair>
    where
        U: UserRepository + ?Sized,
    {
        let now = self.clock.now();

        let claims = self
            .codec
            .decode::<RefreshClaims>(refresh_token, now)
            .map_err(|e| {
                debug!(reason = %e, "Refresh token failed to decode");
                DomainError::from(TokenError::InvalidRefreshToken)
            })?;

        self.validate_refresh_at(refresh_token, claims.subject(), now)
            .await?;

        let principal = users.find_by_id(claims.subject()).await?.ok_or_else(|| {
            warn!(subject = %claims.sub, "Refresh token subject no longer exists");
            DomainError::from(TokenError::InvalidRefreshToken)
        })?;

        let pair = self.issue_pair_at(&principal, now).await?;
        info!(subject = %principal.id, "Rotated refresh token");
        Ok(pair)
    }

    /// Revokes a session
    ///
    /// Blacklists the access token for its remaining lifetime, then deletes the
    /// subject's stored refresh token. An expired or malformed access token is not
    /// blacklisted. Both steps always run; a store failure in either is reported
    /// after both have been attempted.
    pub async fn logout(&self, access_token: &str, subject_id: &str) -> DomainResult<LogoutOutcome> {
        let now = self.clock.now();

        let blacklist_result = match self.codec.decode::<AccessClaims>(access_token, now) {
            Ok(claims) => {
                if claims.sub != subject_id {
                    warn!(
                        token_subject = %claims.sub,
                        subject = %subject_id,
                        "Logout subject differs from access token subject"
                    );
                }
                let ttl = claims.remaining_lifetime(now);
                self.store
                    .set(&blacklist_key(access_token), BLACKLIST_MARKER, ttl as u64)
                    .await
                    .map(|_| true)
            }
            Err(e) => {
                debug!(
                    token = %token_fingerprint(access_token),
                    reason = %e,
                    "Skipping blacklist for undecodable access token"
                );
                Ok(false)
            }
        };

        let revoke_result = self.store.delete(&refresh_key(subject_id)).await;

        match (blacklist_result, revoke_result) {
            (Ok(blacklisted), Ok(refresh_revoked)) => {
                info!(subject = %subject_id, blacklisted, refresh_revoked, "Logged out");
                Ok(LogoutOutcome {
                    blacklisted,
                    refresh_revoked,
                })
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(subject = %subject_id, error = %e, "Logout incomplete");
                Err(e)
            }
        }
    }

    /// Decodes an access token without the blacklist check
    pub fn extract_access_payload(&self, token: &str) -> DomainResult<AccessClaims> {
        let now = self.clock.now();
        self.codec
            .decode::<AccessClaims>(token, now)
            .map_err(|_| TokenError::InvalidToken.into())
    }
}
