//! Planner records and their PII split.
//!
//! Every entity the planner stores mixes cleartext columns (ids, dates,
//! numeric grades, weekday numbers) with encrypted ones (titles,
//! descriptions, subjects, names, emails). This crate owns that split:
//! the per-column ciphertext limits, the record ↔ row codecs that move
//! PII through the field cipher, and the lookup digest that lets login
//! find a user without decrypting anything.
//!
//! Rows carry only ciphertext and cleartext columns — a row type never
//! holds plaintext PII, so handing one to storage cannot leak.

pub mod codec;
pub mod digest;
mod error;
pub mod fields;
mod types;

pub use codec::{
    decrypt_hour, decrypt_mark, decrypt_note, decrypt_profile, encrypt_hour, encrypt_mark,
    encrypt_note, encrypt_profile,
};
pub use digest::email_digest;
pub use error::{RecordError, RecordResult};
pub use fields::FieldSpec;
pub use types::{
    EncryptedProfile, HourRow, Mark, MarkDraft, MarkRow, Note, NoteDraft, NoteRow, Profile,
    StudyHour, StudyHourDraft,
};
