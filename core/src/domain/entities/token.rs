//! Token claim sets and token pair entities.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::principal::Principal;

/// Default access token lifetime (15 seconds)
pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 15;

/// Default refresh token lifetime (10 minutes)
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 600;

/// The two kinds of token, each signed with its own secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Behaviour shared by every claim set the codec handles
pub trait ClaimSet: Serialize + DeserializeOwned {
    /// Token kind this claim set belongs to
    const KIND: TokenKind;

    fn subject(&self) -> &str;

    fn issued_at(&self) -> i64;

    fn expires_at(&self) -> i64;

    /// A token is expired once `now` reaches `exp`
    fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at()
    }

    /// Seconds left until expiry, zero or negative once expired
    fn remaining_lifetime(&self, now: i64) -> i64 {
        self.expires_at() - now
    }
}

/// Access token payload carrying the full principal profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessClaims {
    /// Subject (principal ID)
    pub sub: String,

    pub email: String,

    pub name: String,

    pub role: String,

    /// Issued at (epoch seconds)
    pub iat: i64,

    /// Expiration (epoch seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Builds access claims for a principal issued at `now`
    pub fn for_principal(principal: &Principal, now: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: principal.id.clone(),
            email: principal.email.clone(),
            name: principal.name.clone(),
            role: principal.role.clone(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }

    /// Reconstructs the principal carried by the token
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

impl ClaimSet for AccessClaims {
    const KIND: TokenKind = TokenKind::Access;

    fn subject(&self) -> &str {
        &self.sub
    }

    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Refresh token payload
///
/// Deliberately minimal: only the subject and the validity window, so a leaked
/// refresh token discloses no profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshClaims {
    /// Subject (principal ID)
    pub sub: String,

    /// Issued at (epoch seconds)
    pub iat: i64,

    /// Expiration (epoch seconds)
    pub exp: i64,
}

impl RefreshClaims {
    pub fn for_subject(subject_id: impl Into<String>, now: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: subject_id.into(),
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }
}

impl ClaimSet for RefreshClaims {
    const KIND: TokenKind = TokenKind::Refresh;

    fn subject(&self) -> &str {
        &self.sub
    }

    fn issued_at(&self) -> i64 {
        self.iat
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Access and refresh token issued together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal::new("1", "test@example.com", "Test User", "user")
    }

    #[test]
    fn test_access_claims_carry_full_profile() {
        let claims = AccessClaims::for_principal(&principal(), 1_000, DEFAULT_ACCESS_TTL_SECONDS);

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.name, "Test User");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 1_015);
        assert_eq!(claims.principal(), principal());
    }

    #[test]
    fn test_refresh_claims_serialize_only_subject_and_window() {
        let claims = RefreshClaims::for_subject("1", 1_000, DEFAULT_REFRESH_TTL_SECONDS);
        let json = serde_json::to_value(&claims).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["sub"], "1");
        assert_eq!(json["iat"], 1_000);
        assert_eq!(json["exp"], 1_600);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = AccessClaims::for_principal(&principal(), 1_000, 15);

        assert!(!claims.is_expired_at(1_014));
        assert!(claims.is_expired_at(1_015));
        assert_eq!(claims.remaining_lifetime(1_010), 5);
        assert_eq!(claims.remaining_lifetime(1_020), -5);
    }

    #[test]
    fn test_expiry_saturates_instead_of_overflowing() {
        let claims = AccessClaims::for_principal(&principal(), 1_000, i64::MAX);
        assert_eq!(claims.exp, i64::MAX);
        assert!(!claims.is_expired_at(1_000));
    }

    #[test]
    fn test_unknown_claim_rejected() {
        let payload = r#"{"sub":"1","iat":1,"exp":2,"role":"admin"}"#;
        assert!(serde_json::from_str::<RefreshClaims>(payload).is_err());
    }

    #[test]
    fn test_missing_claim_rejected() {
        let payload = r#"{"sub":"1","email":"a@b.c","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<AccessClaims>(payload).is_err());
    }

    #[test]
    fn test_token_pair_uses_camel_case() {
        let pair = TokenPair::new("a".to_string(), "r".to_string());
        let json = serde_json::to_value(&pair).unwrap();

        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
    }
}
