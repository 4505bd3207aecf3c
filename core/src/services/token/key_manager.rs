//! HMAC signing keys for the two token kinds

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::domain::entities::token::TokenKind;
use crate::errors::DomainError;

/// A symmetric key pair for one token kind
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl SigningKey {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

/// Provider of the access and refresh signing keys
///
/// Keys are derived once from configuration and stay fixed for the lifetime of the
/// process.
#[derive(Clone)]
pub struct SigningKeys {
    access: SigningKey,
    refresh: SigningKey,
}

impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeys")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

impl SigningKeys {
    /// Creates the key provider from the two configured secrets
    ///
    /// # Arguments
    ///
    /// * `access_secret` - Secret used to sign access tokens
    /// * `refresh_secret` - Secret used to sign refresh tokens
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKeys)` - Keys derived successfully
    /// * `Err(DomainError)` - A secret is empty, or both secrets are identical
    pub fn new(access_secret: &str, refresh_secret: &str) -> Result<Self, DomainError> {
        if access_secret.is_empty() || refresh_secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT signing secrets must not be empty".to_string(),
            });
        }

        // Identical secrets would let a refresh token pass as an access token.
        if access_secret == refresh_secret {
            return Err(DomainError::Configuration {
                message: "Access and refresh secrets must differ".to_string(),
            });
        }

        Ok(Self {
            access: SigningKey::from_secret(access_secret),
            refresh: SigningKey::from_secret(refresh_secret),
        })
    }

    pub fn access_key(&self) -> &SigningKey {
        &self.access
    }

    pub fn refresh_key(&self) -> &SigningKey {
        &self.refresh
    }

    /// Key for the given token kind
    pub fn key_for(&self, kind: TokenKind) -> &SigningKey {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_secret() {
        assert!(matches!(
            SigningKeys::new("", "refresh-secret"),
            Err(DomainError::Configuration { .. })
        ));
        assert!(SigningKeys::new("access-secret", "").is_err());
    }

    #[test]
    fn test_rejects_identical_secrets() {
        assert!(matches!(
            SigningKeys::new("same-secret", "same-secret"),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let keys = SigningKeys::new("access-secret", "refresh-secret").unwrap();
        let rendered = format!("{:?}", keys);

        assert!(!rendered.contains("access-secret"));
        assert!(rendered.contains("[REDACTED]"));
        assert_eq!(keys.key_for(TokenKind::Access).algorithm(), Algorithm::HS256);
    }
}
