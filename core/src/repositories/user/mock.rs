//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::principal::Principal;
use crate::errors::DomainResult;

use super::r#trait::UserRepository;

/// Mock directory holding principals and their plaintext test passwords
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<(Principal, String)>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the demo principal
    pub fn with_demo_user() -> Self {
        let repo = Self::new();
        repo.insert(
            Principal::new("1", "test@example.com", "Test User", "user"),
            "password",
        );
        repo
    }

    pub fn insert(&self, principal: Principal, password: &str) {
        self.users
            .lock()
            .unwrap()
            .push((principal, password.to_string()));
    }

    pub fn remove(&self, id: &str) {
        self.users.lock().unwrap().retain(|(p, _)| p.id != id);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<Principal>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|(p, pw)| p.email == email && pw == password)
            .map(|(p, _)| p.clone()))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Principal>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|(p, _)| p.id == id).map(|(p, _)| p.clone()))
    }
}
