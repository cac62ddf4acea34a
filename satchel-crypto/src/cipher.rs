//! ChaCha20-Poly1305 authenticated encryption.
//!
//! Every call to [`encrypt`] generates a fresh random 96-bit nonce via
//! the system CSPRNG. Nonce reuse under the same key would break the
//! cipher's confidentiality guarantees.

use crate::error::{CryptoError, CryptoResult};
use crate::key::KEY_SIZE;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// ChaCha20-Poly1305 nonce length (96 bits).
pub const NONCE_SIZE: usize = 12;
/// Poly1305 authentication tag length appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

/// Nonce plus ciphertext-with-tag, as produced by [`encrypt`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptedData {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
}

impl EncryptedData {
    /// The fixed text representation stored in database columns:
    /// `base64(nonce ‖ ciphertext)`. Wrapped keys and field ciphertexts
    /// use this same form, so one length-accounting rule covers both.
    pub fn to_storage_string(&self) -> String {
        let mut raw = Vec::with_capacity(NONCE_SIZE + self.ciphertext.len());
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Parses the storage form back into its parts.
    pub fn from_storage_string(encoded: &str) -> CryptoResult<Self> {
        if encoded.is_empty() {
            return Err(CryptoError::InvalidInput("empty ciphertext".to_string()));
        }
        let raw = STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::InvalidInput(format!("base64 decode: {e}")))?;
        if raw.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::InvalidInput(format!(
                "ciphertext too short: {} bytes",
                raw.len()
            )));
        }
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&raw[..NONCE_SIZE]);
        Ok(Self {
            nonce,
            ciphertext: raw[NONCE_SIZE..].to_vec(),
        })
    }
}

/// Encrypts plaintext under a 256-bit key with a fresh random nonce.
pub fn encrypt(key: &[u8; KEY_SIZE], plaintext: &[u8]) -> CryptoResult<EncryptedData> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| CryptoError::Encryption("AEAD seal failed".to_string()))?;

    Ok(EncryptedData {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypts and authenticates. A wrong key, a corrupted ciphertext and
/// deliberate tampering all surface as the same [`CryptoError::DecryptionFailed`].
pub fn decrypt(key: &[u8; KEY_SIZE], data: &EncryptedData) -> CryptoResult<Vec<u8>> {
    if data.ciphertext.len() < TAG_SIZE {
        return Err(CryptoError::InvalidInput(
            "ciphertext shorter than authentication tag".to_string(),
        ));
    }
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(&data.nonce), data.ciphertext.as_slice())
        .map_err(|_| CryptoError::DecryptionFailed)
}
