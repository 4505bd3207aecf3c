//! Signed token encoding and decoding

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::ClaimSet;
use crate::errors::TokenError;

use super::key_manager::SigningKeys;

/// Encodes claim sets into compact HS256 tokens and decodes them back
///
/// The codec never consults the revocation store. Expiry is checked against the
/// caller's clock sample rather than the library's own clock, so every check within
/// one lifecycle operation agrees on the same instant.
#[derive(Clone)]
pub struct TokenCodec {
    keys: SigningKeys,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").field("keys", &self.keys).finish()
    }
}

impl TokenCodec {
    pub fn new(keys: SigningKeys) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self { keys, validation }
    }

    /// Signs `claims` with the key of its token kind
    pub fn encode<T: ClaimSet>(&self, claims: &T) -> Result<String, TokenError> {
        let key = self.keys.key_for(T::KIND);
        encode(&Header::new(key.algorithm()), claims, key.encoding_key())
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verifies and decodes a token of kind `T`
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - Signature verified, payload matches the claim set, and `now < exp`
    /// * `Err(TokenError::InvalidSignature)` - Signed with a different key
    /// * `Err(TokenError::Expired)` - `now` has reached `exp`
    /// * `Err(TokenError::InvalidTokenFormat)` - Not a compact token, or the payload
    ///   has missing or unknown claims
    pub fn decode<T: ClaimSet>(&self, token: &str, now: i64) -> Result<T, TokenError> {
        let key = self.keys.key_for(T::KIND);
        let data = decode::<T>(token, key.decoding_key(), &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            }
        })?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Short tail of a token, safe to put in logs
pub fn token_fingerprint(token: &str) -> String {
    let count = token.chars().count();
    token.chars().skip(count.saturating_sub(8)).collect()
}
