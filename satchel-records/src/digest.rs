//! Email lookup digest.
//!
//! Login and uniqueness checks need equality lookup on a column whose
//! plaintext is never stored. The digest is a SHA-256 over the
//! normalized email, hex-encoded; it lives in its own indexed column
//! next to the email ciphertext and is the only column those queries
//! touch. Not reversible, and independent of any key.

use sha2::{Digest, Sha256};

/// Digest of the trimmed, lowercased email.
pub fn email_digest(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}
