//! Process-wide master key, injected from deployment configuration.
//!
//! Constructed once at startup and passed explicitly to the components
//! that need it. There is no ambient/global accessor: absence of the
//! secret is a construction failure, not a runtime surprise.

use crate::error::{KeyringError, KeyringResult};
use satchel_crypto::MasterKey;

/// Holds the single process-wide master secret.
///
/// The key is never logged, never serialized and never persisted; the
/// type intentionally implements neither `Debug` nor `Clone`.
pub struct MasterKeyProvider {
    key: MasterKey,
}

impl MasterKeyProvider {
    /// Wraps an already-loaded master key (tests, non-env config paths).
    pub fn new(key: MasterKey) -> Self {
        Self { key }
    }

    /// Loads the master key from an environment variable holding its
    /// base64 form.
    ///
    /// An unset variable is [`KeyringError::ConfigurationMissing`]; a
    /// set-but-malformed value is [`KeyringError::ConfigurationInvalid`].
    pub fn from_env(var: &str) -> KeyringResult<Self> {
        let encoded = std::env::var(var)
            .map_err(|_| KeyringError::ConfigurationMissing(var.to_string()))?;
        let key = MasterKey::from_base64(&encoded)
            .map_err(|e| KeyringError::ConfigurationInvalid(e.to_string()))?;
        Ok(Self { key })
    }

    pub fn master_key(&self) -> &MasterKey {
        &self.key
    }
}
