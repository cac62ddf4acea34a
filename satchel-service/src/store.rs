//! Storage traits — the narrow seam to the relational layer.
//!
//! Implementations persist exactly what they are handed: rows carry
//! ciphertext in PII columns and cleartext elsewhere, so the storage
//! layer needs no keys and no crypto. Each ciphertext column is assumed
//! to declare the maximum length recorded in `satchel_records::fields`;
//! the codecs enforce those maxima before a row reaches this seam.

use chrono::NaiveDate;
use satchel_records::{HourRow, MarkRow, NoteRow};
use thiserror::Error;
use uuid::Uuid;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the storage layer. Deliberately coarse: the service maps
/// them to user-visible outcomes, and backend detail stays out of
/// anything user-facing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Stored user row. `name` and `email` are ciphertext under the user's
/// key; `email_digest` is the lookup column; `wrapped_key` is the
/// user's key encrypted under the master key.
#[derive(Clone, Debug)]
pub struct UserRow {
    pub id: Uuid,
    pub email_digest: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub theme: u8,
    pub wrapped_key: String,
}

pub trait UserStore: Send + Sync {
    /// Inserts the complete user row — wrapped key included — as one
    /// atomic write. A user must never exist without its key, so there
    /// is deliberately no way to insert the row in pieces.
    /// Returns [`StoreError::Conflict`] if the email digest is taken.
    fn create_user(&self, row: UserRow) -> StoreResult<()>;

    fn user_by_email_digest(&self, digest: &str) -> StoreResult<Option<UserRow>>;

    fn user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>>;

    /// Deletes the user and everything they own (notes, marks, hours,
    /// and with them the wrapped key).
    fn delete_user(&self, id: Uuid) -> StoreResult<()>;
}

pub trait NoteStore: Send + Sync {
    fn insert_note(&self, row: NoteRow) -> StoreResult<()>;

    /// Fetch scoped by owner: another user's note id behaves exactly
    /// like a missing one.
    fn note_by_id(&self, user_id: Uuid, id: Uuid) -> StoreResult<Option<NoteRow>>;

    fn notes_on(&self, user_id: Uuid, date: NaiveDate) -> StoreResult<Vec<NoteRow>>;

    /// Distinct days-of-month with at least one note in the range
    /// (calendar view; reads only the cleartext date column).
    fn note_days(&self, user_id: Uuid, start: NaiveDate, end: NaiveDate) -> StoreResult<Vec<u32>>;

    fn update_note(&self, row: NoteRow) -> StoreResult<()>;

    fn delete_note(&self, user_id: Uuid, id: Uuid) -> StoreResult<()>;
}

pub trait MarkStore: Send + Sync {
    fn insert_mark(&self, row: MarkRow) -> StoreResult<()>;

    fn mark_by_id(&self, user_id: Uuid, id: Uuid) -> StoreResult<Option<MarkRow>>;

    /// All of a user's marks, newest date first.
    fn marks_for_user(&self, user_id: Uuid) -> StoreResult<Vec<MarkRow>>;

    fn update_mark(&self, row: MarkRow) -> StoreResult<()>;

    fn delete_mark(&self, user_id: Uuid, id: Uuid) -> StoreResult<()>;
}

pub trait HourStore: Send + Sync {
    fn insert_hour(&self, row: HourRow) -> StoreResult<()>;

    /// Entries for one ISO weekday number (1 = Monday .. 7 = Sunday).
    fn hours_for_day(&self, user_id: Uuid, day: u8) -> StoreResult<Vec<HourRow>>;

    fn delete_hour(&self, user_id: Uuid, id: Uuid) -> StoreResult<()>;
}

/// Everything the planner service needs from one backend.
pub trait PlannerStore: UserStore + NoteStore + MarkStore + HourStore {}

impl<T: UserStore + NoteStore + MarkStore + HourStore> PlannerStore for T {}
