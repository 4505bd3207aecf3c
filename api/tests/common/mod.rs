//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use tg_api::AppState;
use tg_core::{ManualClock, Principal, RevocationStore, SessionService, TokenService, TokenServiceConfig};
use tg_infra::{InMemoryRevocationStore, StaticUserRepository};

pub const START: i64 = 1_700_000_000;

pub type MemoryStore = InMemoryRevocationStore<ManualClock>;
pub type TestState<S = MemoryStore> = AppState<StaticUserRepository, S, ManualClock>;

pub fn directory() -> StaticUserRepository {
    StaticUserRepository::new(vec![
        (
            Principal::new("1", "test@example.com", "Test User", "user"),
            "password".to_string(),
        ),
        (
            Principal::new("2", "admin@example.com", "Admin User", "admin"),
            "admin-password".to_string(),
        ),
    ])
}

/// Application state over the given store, sharing `clock` with the token service
pub fn state_with_store<S: RevocationStore>(store: S, clock: ManualClock) -> web::Data<TestState<S>> {
    let tokens = TokenService::with_clock(
        store,
        TokenServiceConfig::new("http-test-access-secret", "http-test-refresh-secret"),
        clock,
    )
    .unwrap();
    let session = SessionService::new(Arc::new(directory()), Arc::new(tokens));
    web::Data::new(AppState::new(session))
}

/// In-memory state plus handles on its store and clock
pub fn state() -> (web::Data<TestState>, MemoryStore, ManualClock) {
    let clock = ManualClock::new(START);
    let store = InMemoryRevocationStore::with_clock(clock.clone());
    (state_with_store(store.clone(), clock.clone()), store, clock)
}
