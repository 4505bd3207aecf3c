//! Authenticated principal entity.

use serde::{Deserialize, Serialize};

/// An authenticated identity
///
/// Produced by the credential check at login and by the directory lookup during
/// refresh. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable subject identifier, used as the `sub` claim
    pub id: String,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Role name used by authorization checks
    pub role: String,
}

impl Principal {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Checks whether the principal carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
