//! Keyring error types.

use thiserror::Error;

/// Result type for keyring operations.
pub type KeyringResult<T> = Result<T, KeyringError>;

/// Errors that can occur in key lifecycle operations.
#[derive(Debug, Error)]
pub enum KeyringError {
    /// The deployment configuration does not supply the master secret.
    /// Fatal at startup: the process must not serve PII-bearing routes.
    #[error("master key configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("master key configuration invalid: {0}")]
    ConfigurationInvalid(String),

    /// Key generation or wrapping failed during registration. Fatal to
    /// that registration attempt; no user row may be created without a
    /// wrapped key.
    #[error("key provisioning failed: {0}")]
    KeyProvisioning(String),

    /// A stored wrapped key failed to unwrap after the user's
    /// credentials verified. A data-integrity fault, deliberately
    /// distinct from bad credentials.
    #[error("stored wrapped key is corrupt")]
    WrappedKeyCorrupt,

    /// No key bound for this session. Equivalent to "not logged in".
    #[error("no key bound for session")]
    NotAuthenticated,
}
