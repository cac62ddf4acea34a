//! Wrapping user keys under the master key.
//!
//! A wrapped key is an ordinary [`EncryptedData`] in storage-string form,
//! so the column-length accounting for field ciphertexts applies to it
//! unchanged. Because the plaintext is always exactly [`KEY_SIZE`] bytes,
//! the wrapped form has a fixed length.

use crate::cipher::{self, EncryptedData, NONCE_SIZE, TAG_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::key::{KEY_SIZE, MasterKey, UserKey};

/// Length of a wrapped key in storage-string form:
/// `base64(nonce ‖ key ‖ tag)` = 4 · ⌈(12 + 32 + 16) / 3⌉ characters.
pub const WRAPPED_KEY_LEN: usize = (NONCE_SIZE + KEY_SIZE + TAG_SIZE).div_ceil(3) * 4;

/// Encrypts a user key under the master key for persistence.
pub fn wrap_user_key(master: &MasterKey, user: &UserKey) -> CryptoResult<String> {
    let encrypted = cipher::encrypt(master.as_bytes(), user.as_bytes())?;
    Ok(encrypted.to_storage_string())
}

/// Decrypts a stored wrapped key back into the raw user key.
///
/// Fails with [`CryptoError::DecryptionFailed`] on a wrong master key or
/// a corrupted column value; the recovered plaintext must be exactly
/// [`KEY_SIZE`] bytes.
pub fn unwrap_user_key(master: &MasterKey, wrapped: &str) -> CryptoResult<UserKey> {
    let encrypted = EncryptedData::from_storage_string(wrapped)?;
    let plaintext = cipher::decrypt(master.as_bytes(), &encrypted)?;

    if plaintext.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: plaintext.len(),
        });
    }

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&plaintext);
    Ok(UserKey::from_bytes(bytes))
}
