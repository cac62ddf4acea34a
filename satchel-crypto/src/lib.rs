//! Encryption layer for Satchel.
//!
//! Provides per-student field encryption using:
//! - ChaCha20-Poly1305 for authenticated encryption
//! - Argon2id for password hashing (credentials only)
//! - Secure key management with zeroization
//!
//! # Architecture
//!
//! The encryption uses a two-tier key system:
//!
//! 1. **Master Key**: a single process-wide secret loaded from deployment
//!    configuration at startup. It is held only in memory and never
//!    persisted alongside user data.
//!
//! 2. **User Key**: a random key generated for each student at
//!    registration. The user key is encrypted (wrapped) with the master
//!    key and stored on the student row; it is unwrapped once per login
//!    and used to encrypt every PII field the student owns.
//!
//! This architecture allows:
//! - Changing a password without re-encrypting any data
//! - Rotating the master key by re-wrapping user keys, not ciphertext
//! - A database dump alone revealing none of a student's fields

mod cipher;
mod error;
pub mod field;
mod key;
mod keywrap;
pub mod password;

pub use cipher::{EncryptedData, NONCE_SIZE, TAG_SIZE, decrypt, encrypt};
pub use error::{CryptoError, CryptoResult};
pub use field::{decode_field, encode_field, encoded_len};
pub use key::{KEY_SIZE, MasterKey, UserKey};
pub use keywrap::{WRAPPED_KEY_LEN, unwrap_user_key, wrap_user_key};
