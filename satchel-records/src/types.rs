//! Planner entities in plaintext (handler-facing) and row
//! (storage-facing) form.
//!
//! Row types hold ciphertext in the PII columns and cleartext in the
//! rest; they are what the storage traits accept and return.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------- notes

/// Input for creating or updating a calendar note.
#[derive(Clone, Debug, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// A decrypted calendar note.
#[derive(Clone, Debug, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Stored form of a note: `title` and `description` are ciphertext.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

// ---------------------------------------------------------------- marks

/// Input for recording a grade.
#[derive(Clone, Debug, Deserialize)]
pub struct MarkDraft {
    pub grade: f32,
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
}

/// A decrypted mark. The numeric grade is never encrypted.
#[derive(Clone, Debug, Serialize)]
pub struct Mark {
    pub id: Uuid,
    pub grade: f32,
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
}

/// Stored form of a mark: `title` and `subject` are ciphertext.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarkRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub grade: f32,
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
}

// ---------------------------------------------------------- study hours

/// Input for a weekly study-hours entry.
#[derive(Clone, Debug, Deserialize)]
pub struct StudyHourDraft {
    pub day: Weekday,
    pub hours: f32,
    pub name: String,
}

/// A decrypted study-hours entry.
#[derive(Clone, Debug, Serialize)]
pub struct StudyHour {
    pub id: Uuid,
    pub day: Weekday,
    pub hours: f32,
    pub name: String,
}

/// Stored form of a study-hours entry: `name` is ciphertext, `day` is
/// the ISO weekday number (1 = Monday .. 7 = Sunday).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HourRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: u8,
    pub hours: f32,
    pub name: String,
}

// -------------------------------------------------------------- profile

/// A decrypted user profile. `theme` is a small cleartext preference.
#[derive(Clone, Debug, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub theme: u8,
}

/// Ciphertext forms of the profile's PII columns.
#[derive(Clone, Debug)]
pub struct EncryptedProfile {
    pub name: String,
    pub email: String,
}
