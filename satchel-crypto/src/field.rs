//! Per-field encryption with ciphertext-length enforcement.
//!
//! The length check runs on the *encoded* form, after encryption. A
//! plaintext length check alone is not enough: nonce, tag and base64
//! expansion mean a value just under a naive plaintext limit can still
//! overflow the destination column and be silently truncated by the
//! database.

use crate::cipher::{self, EncryptedData, NONCE_SIZE, TAG_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::key::UserKey;

/// Storage-string length produced by encrypting `plaintext_len` bytes.
pub fn encoded_len(plaintext_len: usize) -> usize {
    (plaintext_len + NONCE_SIZE + TAG_SIZE).div_ceil(3) * 4
}

/// Encrypts one field value and verifies the encoded form fits the
/// destination column before anything is handed to storage.
///
/// The same check runs on create and update paths — callers pass the
/// column's declared maximum on every write.
pub fn encode_field(
    key: &UserKey,
    plaintext: &str,
    max_ciphertext_len: usize,
) -> CryptoResult<String> {
    let encrypted = cipher::encrypt(key.as_bytes(), plaintext.as_bytes())?;
    let encoded = encrypted.to_storage_string();

    if encoded.len() > max_ciphertext_len {
        return Err(CryptoError::LengthExceeded {
            max: max_ciphertext_len,
            actual: encoded.len(),
        });
    }

    Ok(encoded)
}

/// Decrypts one stored field value back to plaintext.
///
/// UTF-8 validation happens after the AEAD check; both failures report
/// as [`CryptoError::DecryptionFailed`] so callers cannot distinguish a
/// wrong key from corrupted data.
pub fn decode_field(key: &UserKey, ciphertext: &str) -> CryptoResult<String> {
    let encrypted = EncryptedData::from_storage_string(ciphertext)?;
    let plaintext = cipher::decrypt(key.as_bytes(), &encrypted)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_matches_actual_output() {
        let key = UserKey::generate();
        for len in [0, 1, 2, 3, 50, 255, 1000] {
            let plaintext = "a".repeat(len);
            let encoded = encode_field(&key, &plaintext, usize::MAX).unwrap();
            assert_eq!(encoded.len(), encoded_len(len), "plaintext length {len}");
        }
    }
}
