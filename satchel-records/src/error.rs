//! Record codec error types.

use satchel_crypto::CryptoError;
use thiserror::Error;

/// Result type for record codec operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors from moving a record through the field cipher.
#[derive(Debug, Error)]
pub enum RecordError {
    /// One field's ciphertext would not fit its destination column.
    /// Carries the user-facing field name so the caller can say which
    /// value to shorten.
    #[error("{field} too long: ciphertext {actual} exceeds column limit {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
