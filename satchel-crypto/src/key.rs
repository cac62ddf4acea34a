//! Key material types.
//!
//! Both key types wrap a fixed 32-byte secret and are zeroized on drop.
//! Neither implements `Debug` or `Display`, so key bytes cannot end up
//! in logs or error messages by accident.

use crate::error::{CryptoError, CryptoResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes (ChaCha20-Poly1305 requires 256-bit keys).
pub const KEY_SIZE: usize = 32;

/// The process-wide master secret, loaded once from deployment
/// configuration. Wraps user keys; never touches field plaintext
/// directly and is never persisted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; KEY_SIZE]);

impl MasterKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parses the base64 form used in deployment configuration.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let raw = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidInput(format!("master key base64: {e}")))?;
        if raw.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: raw.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&raw);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// A per-student encryption key. Generated at registration, stored only
/// in wrapped form, and held raw in memory for the lifetime of an
/// authenticated session.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct UserKey([u8; KEY_SIZE]);

impl UserKey {
    /// Generates a fresh random key from the OS CSPRNG.
    ///
    /// Never derived from user-supplied data (password, email): a
    /// credential compromise must not compromise stored fields.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let k1 = UserKey::generate();
        let k2 = UserKey::generate();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn master_key_base64_roundtrip() {
        let bytes = [7u8; KEY_SIZE];
        let encoded = STANDARD.encode(bytes);
        let key = MasterKey::from_base64(&encoded).unwrap();
        assert_eq!(key.as_bytes(), &bytes);
    }

    #[test]
    fn master_key_rejects_short_input() {
        let encoded = STANDARD.encode([0u8; 16]);
        let result = MasterKey::from_base64(&encoded);
        assert!(matches!(
            result,
            Err(CryptoError::InvalidKeyLength { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn master_key_rejects_garbage() {
        assert!(MasterKey::from_base64("not base64 at all!!").is_err());
    }
}
