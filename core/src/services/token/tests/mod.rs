//! Tests for the token lifecycle module


use crate::domain::entities::principal::Principal;
use crate::repositories::MockRevocationStore;
use crate::services::token::{ManualClock, TokenService, TokenServiceConfig};

pub(crate) const START: i64 = 1_700_000_000;

pub(crate) fn demo_principal() -> Principal {
    Principal::new("1", "test@example.com", "Test User", "user")
}

pub(crate) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig::new("test-access-secret", "test-refresh-secret")
}

/// Token service over a mock store, both driven by the returned clock
pub(crate) fn create_test_service() -> (
    TokenService<MockRevocationStore, ManualClock>,
    MockRevocationStore,
    ManualClock,
) {
    let clock = ManualClock::new(START);
    let store = MockRevocationStore::new(clock.clone());
    let service = TokenService::with_clock(store.clone(), test_config(), clock.clone())
        .expect("Failed to create token service");
    (service, store, clock)
}
