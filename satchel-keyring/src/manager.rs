//! Per-user key provisioning and login unwrap.
//!
//! Stateless: every function takes the master key provider explicitly
//! and retains nothing between calls. Raw keys live only in the caller's
//! hands (and, after login, in the session cache).

use crate::error::{KeyringError, KeyringResult};
use crate::master::MasterKeyProvider;
use satchel_crypto::{UserKey, unwrap_user_key, wrap_user_key};
use tracing::error;

/// A freshly provisioned key pair of forms: the raw key to bind to the
/// registering session, and the wrapped form to persist on the user row.
pub struct ProvisionedKey {
    pub raw: UserKey,
    pub wrapped: String,
}

/// Generates and wraps a key for a new user.
///
/// The wrapped form is checked against the declared column maximum here,
/// before the caller persists anything: a wrapped key that would be
/// truncated by the database must abort the registration, not corrupt it.
/// The caller persists `wrapped` in the same transaction as the rest of
/// the user row.
pub fn provision_for_new_user(
    master: &MasterKeyProvider,
    max_wrapped_len: usize,
) -> KeyringResult<ProvisionedKey> {
    let raw = UserKey::generate();
    let wrapped = wrap_user_key(master.master_key(), &raw)
        .map_err(|e| KeyringError::KeyProvisioning(e.to_string()))?;

    if wrapped.len() > max_wrapped_len {
        return Err(KeyringError::KeyProvisioning(format!(
            "wrapped key length {} exceeds column limit {}",
            wrapped.len(),
            max_wrapped_len
        )));
    }

    Ok(ProvisionedKey { raw, wrapped })
}

/// Unwraps a stored wrapped key after credential verification succeeded.
///
/// Any failure here means the stored key material is unusable — the user
/// typed the right password, so this must never surface as "invalid
/// credentials". Not retried: the same inputs cannot succeed twice.
pub fn unwrap_for_login(master: &MasterKeyProvider, wrapped: &str) -> KeyringResult<UserKey> {
    unwrap_user_key(master.master_key(), wrapped).map_err(|e| {
        error!("wrapped key failed to unwrap: {e}");
        KeyringError::WrappedKeyCorrupt
    })
}
