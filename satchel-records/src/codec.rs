//! Record ↔ row codecs.
//!
//! Encryption takes an explicit row id so create and update paths run
//! the identical code: create passes a fresh id, update passes the
//! existing one. Cleartext columns pass through untouched.

use crate::error::{RecordError, RecordResult};
use crate::fields::{self, FieldSpec};
use crate::types::{
    EncryptedProfile, HourRow, Mark, MarkDraft, MarkRow, Note, NoteDraft, NoteRow, Profile,
    StudyHour, StudyHourDraft,
};
use chrono::Weekday;
use satchel_crypto::{CryptoError, UserKey, decode_field, encode_field};
use uuid::Uuid;

/// Encrypts one field against its column spec, attributing a length
/// overflow to the field by name.
fn encode(key: &UserKey, value: &str, spec: FieldSpec) -> RecordResult<String> {
    encode_field(key, value, spec.max_ciphertext_len).map_err(|e| match e {
        CryptoError::LengthExceeded { max, actual } => RecordError::FieldTooLong {
            field: spec.name,
            max,
            actual,
        },
        other => RecordError::Crypto(other),
    })
}

/// Encrypts a note draft into its stored row form.
pub fn encrypt_note(
    key: &UserKey,
    id: Uuid,
    user_id: Uuid,
    draft: &NoteDraft,
) -> RecordResult<NoteRow> {
    Ok(NoteRow {
        id,
        user_id,
        title: encode(key, &draft.title, fields::NOTE_TITLE)?,
        description: encode(key, &draft.description, fields::NOTE_DESCRIPTION)?,
        date: draft.date,
    })
}

/// Decrypts a stored note row.
pub fn decrypt_note(key: &UserKey, row: &NoteRow) -> RecordResult<Note> {
    Ok(Note {
        id: row.id,
        title: decode_field(key, &row.title)?,
        description: decode_field(key, &row.description)?,
        date: row.date,
    })
}

/// Encrypts a mark draft into its stored row form. The grade and date
/// stay cleartext so range queries and averages work server-side.
pub fn encrypt_mark(
    key: &UserKey,
    id: Uuid,
    user_id: Uuid,
    draft: &MarkDraft,
) -> RecordResult<MarkRow> {
    Ok(MarkRow {
        id,
        user_id,
        grade: draft.grade,
        title: encode(key, &draft.title, fields::MARK_TITLE)?,
        subject: encode(key, &draft.subject, fields::MARK_SUBJECT)?,
        date: draft.date,
    })
}

/// Decrypts a stored mark row.
pub fn decrypt_mark(key: &UserKey, row: &MarkRow) -> RecordResult<Mark> {
    Ok(Mark {
        id: row.id,
        grade: row.grade,
        title: decode_field(key, &row.title)?,
        subject: decode_field(key, &row.subject)?,
        date: row.date,
    })
}

/// Encrypts a study-hours draft into its stored row form.
pub fn encrypt_hour(
    key: &UserKey,
    id: Uuid,
    user_id: Uuid,
    draft: &StudyHourDraft,
) -> RecordResult<HourRow> {
    Ok(HourRow {
        id,
        user_id,
        day: draft.day.number_from_monday() as u8,
        hours: draft.hours,
        name: encode(key, &draft.name, fields::HOUR_NAME)?,
    })
}

/// Decrypts a stored study-hours row. A weekday number outside 1..=7 is
/// cleartext-column corruption and reported as invalid input.
pub fn decrypt_hour(key: &UserKey, row: &HourRow) -> RecordResult<StudyHour> {
    Ok(StudyHour {
        id: row.id,
        day: weekday_from_number(row.day).ok_or_else(|| {
            RecordError::Crypto(CryptoError::InvalidInput(format!(
                "weekday number out of range: {}",
                row.day
            )))
        })?,
        hours: row.hours,
        name: decode_field(key, &row.name)?,
    })
}

/// Encrypts the PII columns of a user profile.
pub fn encrypt_profile(key: &UserKey, name: &str, email: &str) -> RecordResult<EncryptedProfile> {
    Ok(EncryptedProfile {
        name: encode(key, name, fields::USER_NAME)?,
        email: encode(key, email, fields::USER_EMAIL)?,
    })
}

/// Decrypts the PII columns of a user profile.
pub fn decrypt_profile(
    key: &UserKey,
    encrypted: &EncryptedProfile,
    theme: u8,
) -> RecordResult<Profile> {
    Ok(Profile {
        name: decode_field(key, &encrypted.name)?,
        email: decode_field(key, &encrypted.email)?,
        theme,
    })
}

fn weekday_from_number(n: u8) -> Option<Weekday> {
    match n {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
