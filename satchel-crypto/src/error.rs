//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in encryption and key operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Wrong key, corrupted ciphertext, or tampering. Deliberately a
    /// single variant with no cause detail so callers cannot tell the
    /// cases apart.
    #[error("decryption failed")]
    DecryptionFailed,

    #[error("invalid ciphertext input: {0}")]
    InvalidInput(String),

    #[error("ciphertext length {actual} exceeds column limit {max}")]
    LengthExceeded { max: usize, actual: usize },

    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}
