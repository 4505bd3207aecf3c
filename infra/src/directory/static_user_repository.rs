//! Fixed, in-process principal directory

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use tracing::debug;

use tg_core::domain::entities::principal::Principal;
use tg_core::errors::DomainResult;
use tg_core::repositories::UserRepository;

struct Account {
    principal: Principal,
    password: String,
}

/// Directory backed by a fixed list of accounts
///
/// Passwords are held in plaintext and compared in constant time. There is no
/// account database behind this; it stands in for one.
pub struct StaticUserRepository {
    accounts: Vec<Account>,
}

impl StaticUserRepository {
    /// Create a directory from principals and their passwords
    pub fn new(accounts: impl IntoIterator<Item = (Principal, String)>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(principal, password)| Account {
                    principal,
                    password,
                })
                .collect(),
        }
    }

    /// Directory holding only the demo account `test@example.com` / `password`
    pub fn demo() -> Self {
        Self::new([(
            Principal::new("1", "test@example.com", "Test User", "user"),
            String::from("password"),
        )])
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for StaticUserRepository {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl UserRepository for StaticUserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<Principal>> {
        let found = self
            .accounts
            .iter()
            .find(|a| a.principal.email == email)
            .filter(|a| constant_time_eq(a.password.as_bytes(), password.as_bytes()))
            .map(|a| a.principal.clone());

        debug!(email = %email, matched = found.is_some(), "Credential check");
        Ok(found)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Principal>> {
        Ok(self
            .accounts
            .iter()
            .find(|a| a.principal.id == id)
            .map(|a| a.principal.clone()))
    }
}
