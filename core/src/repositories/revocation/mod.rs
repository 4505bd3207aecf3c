pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::{
    blacklist_key, refresh_key, RevocationStore, BLACKLIST_KEY_PREFIX, BLACKLIST_MARKER,
    REFRESH_KEY_PREFIX,
};

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockRevocationStore;
