//! Thread-safe cache of unwrapped per-user keys, keyed by session id.
//!
//! The request-handling layer reads keys from this cache to decrypt and
//! encrypt PII fields. Login populates it; logout, session expiry and
//! account deletion clear it. Nothing here is persistent: after a
//! process restart a resumed session must re-unwrap its key from the
//! stored wrapped form.

use crate::error::{KeyringError, KeyringResult};
use satchel_crypto::UserKey;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Session-scoped user key cache.
///
/// Access to a session's binding is serialized by the lock: a logout
/// clearing the key concurrently with an in-flight decrypt either lets
/// the decrypt finish with the pre-clear key or fails it cleanly with
/// [`KeyringError::NotAuthenticated`].
#[derive(Clone)]
pub struct SessionKeyCache {
    keys: Arc<RwLock<HashMap<String, UserKey>>>,
}

impl SessionKeyCache {
    pub fn new() -> Self {
        Self {
            keys: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Binds an unwrapped key to a session, called once per successful
    /// login or registration. Overwrites any prior binding for the same
    /// session id (should not occur in a correct login flow).
    pub async fn bind(&self, session_id: impl Into<String>, key: UserKey) {
        let session_id = session_id.into();
        if self.keys.write().await.insert(session_id, key).is_some() {
            debug!("rebound key for an already-bound session");
        }
    }

    /// Retrieves a cloned key for a session.
    ///
    /// Absence of a binding is "not logged in" — there is no empty-key
    /// state.
    pub async fn get(&self, session_id: &str) -> KeyringResult<UserKey> {
        self.keys
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or(KeyringError::NotAuthenticated)
    }

    /// Drops a session's binding (logout, expiry, account deletion).
    /// Returns whether a binding existed. Clearing affects only this
    /// cache; the wrapped key in storage is untouched.
    pub async fn clear(&self, session_id: &str) -> bool {
        self.keys.write().await.remove(session_id).is_some()
    }

    /// Drops every binding (process shutdown).
    pub async fn clear_all(&self) {
        self.keys.write().await.clear();
    }

    /// Returns the number of live bindings.
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Returns true if no session holds a key.
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}

impl Default for SessionKeyCache {
    fn default() -> Self {
        Self::new()
    }
}
