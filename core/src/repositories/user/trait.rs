//! Principal directory trait used by login and refresh.

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::DomainResult;

/// Lookup of principals by credentials or by subject ID
///
/// Login goes through `find_by_credentials`. Refresh tokens carry only the subject,
/// so rotation resolves the full profile through `find_by_id` before re-issuing an
/// access token.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the principal whose credentials match, `None` on any mismatch
    ///
    /// Implementations must not reveal whether the email or the password was wrong.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<Principal>>;

    /// Return the principal with the given subject ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Principal>>;
}
