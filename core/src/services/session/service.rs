//! Session facade over the token lifecycle service

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::{AuthResponse, LoginCredentials};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::{Clock, SystemClock, TokenService};

/// Externally facing session operations
///
/// Holds no state of its own beyond its collaborators.
pub struct SessionService<U, S, C = SystemClock>
where
    U: UserRepository,
    S: RevocationStore,
    C: Clock,
{
    /// Principal directory for credential checks and refresh lookups
    user_repository: Arc<U>,
    /// Token lifecycle service
    token_service: Arc<TokenService<S, C>>,
}

impl<U, S, C> Clone for SessionService<U, S, C>
where
    U: UserRepository,
    S: RevocationStore,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            token_service: Arc::clone(&self.token_service),
        }
    }
}

impl<U, S, C> SessionService<U, S, C>
where
    U: UserRepository,
    S: RevocationStore,
    C: Clock,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Directory used for login and refresh lookups
    /// * `token_service` - Service for token issuance and revocation
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<S, C>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    pub fn token_service(&self) -> &TokenService<S, C> {
        &self.token_service
    }

    /// Authenticate credentials and issue a token pair
    ///
    /// Wrong credentials fail before any store write.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The principal and its new token pair
    /// * `Err(AuthError::AuthenticationFailed)` - Unknown email or wrong password
    /// * `Err(DomainError::StoreUnavailable)` - The refresh token could not be stored
    pub async fn login(&self, credentials: &LoginCredentials) -> DomainResult<AuthResponse> {
        let principal = self
            .user_repository
            .find_by_credentials(&credentials.email, &credentials.password)
            .await?
            .ok_or_else(|| {
                warn!(email = %credentials.email, "Login failed");
                DomainError::from(AuthError::AuthenticationFailed)
            })?;

        let tokens = self.token_service.issue_pair(&principal).await?;
        info!(subject = %principal.id, "Login succeeded");

        Ok(AuthResponse::new(principal, tokens))
    }

    /// Check whether an access token is currently usable
    pub async fn verify(&self, access_token: &str) -> bool {
        self.token_service.validate_access_token(access_token).await
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        self.token_service
            .refresh_tokens(refresh_token, self.user_repository.as_ref())
            .await
    }

    /// Revoke the session identified by an access token and subject
    pub async fn logout(&self, access_token: &str, subject_id: &str) -> DomainResult<()> {
        self.token_service
            .logout(access_token, subject_id)
            .await
            .map(|_| ())
    }

    /// Resolve the principal behind an access token
    ///
    /// Blacklisted tokens are rejected like any other invalid token. A store outage
    /// is reported as such rather than as an invalid token.
    pub async fn who_am_i(&self, access_token: &str) -> DomainResult<Principal> {
        match self.token_service.check_access_token(access_token).await {
            Ok(claims) => Ok(claims.principal()),
            Err(e) if e.is_store_unavailable() => Err(e),
            Err(_) => Err(TokenError::InvalidToken.into()),
        }
    }

    /// Resolve the principal behind an access token and require a role
    ///
    /// # Returns
    ///
    /// * `Ok(Principal)` - Valid token, and the role matches when one is required
    /// * `Err(TokenError::InvalidToken)` - The token is not usable
    /// * `Err(AuthError::InsufficientPermissions)` - The principal lacks the role
    pub async fn authorize(
        &self,
        access_token: &str,
        required_role: Option<&str>,
    ) -> DomainResult<Principal> {
        let principal = self.who_am_i(access_token).await?;

        if let Some(role) = required_role {
            if !principal.has_role(role) {
                warn!(subject = %principal.id, role = %principal.role, required = %role, "Insufficient permissions");
                return Err(AuthError::InsufficientPermissions.into());
            }
        }

        Ok(principal)
    }
}
