//! Shared test helpers: a full service stack over the in-memory store.

use satchel_crypto::{KEY_SIZE, MasterKey};
use satchel_keyring::{MasterKeyProvider, SessionKeyCache};
use satchel_service::{AccountService, MemoryStore, PlannerService, Registration};
use std::sync::Arc;

pub struct TestEnv {
    pub accounts: AccountService<MemoryStore>,
    pub planner: PlannerService<MemoryStore>,
    pub store: Arc<MemoryStore>,
    pub sessions: SessionKeyCache,
}

/// Service stack wired to one master key, one session cache and one
/// in-memory store.
pub fn env() -> TestEnv {
    let master = Arc::new(MasterKeyProvider::new(MasterKey::from_bytes(
        [0x5A; KEY_SIZE],
    )));
    let sessions = SessionKeyCache::new();
    let store = Arc::new(MemoryStore::new());

    TestEnv {
        accounts: AccountService::new(master, sessions.clone(), store.clone()),
        planner: PlannerService::new(sessions.clone(), store.clone()),
        store,
        sessions,
    }
}

pub fn registration(email: &str, name: &str) -> Registration {
    Registration {
        email: email.to_string(),
        name: name.to_string(),
        password: "correct-horse-battery-staple".to_string(),
        theme: 1,
    }
}
