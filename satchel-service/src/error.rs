//! Service error types — the user-visible mapping of the core taxonomy.

use crate::store::StoreError;
use satchel_keyring::KeyringError;
use satchel_records::RecordError;
use thiserror::Error;
use tracing::error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the request-handling layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unknown email or wrong password — indistinguishable on purpose.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No key bound for this session; identical to "not logged in".
    #[error("not logged in")]
    NotAuthenticated,

    #[error("email already in use")]
    EmailTaken,

    /// The value, once encrypted, does not fit its column. A validation
    /// error for the end user ("title too long"), not an internal fault.
    #[error("{field} too long")]
    FieldTooLong { field: &'static str },

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Decryption failures, key-integrity faults and provisioning
    /// failures all collapse here. The cause is logged; the message
    /// carries nothing an attacker could use as an oracle.
    #[error("internal error")]
    Internal,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<KeyringError> for ServiceError {
    fn from(e: KeyringError) -> Self {
        match e {
            KeyringError::NotAuthenticated => Self::NotAuthenticated,
            other => {
                error!("keyring failure: {other}");
                Self::Internal
            }
        }
    }
}

impl From<RecordError> for ServiceError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::FieldTooLong { field, .. } => Self::FieldTooLong { field },
            RecordError::Crypto(cause) => {
                error!("record codec failure: {cause}");
                Self::Internal
            }
        }
    }
}
