//! Planner CRUD choreography: session key → record codec → store.
//!
//! Every operation starts by reading the session's key from the cache;
//! an unbound session fails before any storage access. Ownership checks
//! ride on the store's user-scoped lookups, so another user's record id
//! behaves exactly like a missing one.

use crate::error::{ServiceError, ServiceResult};
use crate::store::{HourStore, MarkStore, NoteStore, StoreError, StoreResult};
use chrono::{NaiveDate, Weekday};
use satchel_keyring::SessionKeyCache;
use satchel_records::{
    Mark, MarkDraft, Note, NoteDraft, StudyHour, StudyHourDraft, decrypt_hour, decrypt_mark,
    decrypt_note, encrypt_hour, encrypt_mark, encrypt_note,
};
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates note/mark/hour operations for authenticated sessions.
pub struct PlannerService<S> {
    sessions: SessionKeyCache,
    store: Arc<S>,
}

fn found(result: StoreResult<()>, what: &'static str) -> ServiceResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(StoreError::NotFound) => Err(ServiceError::NotFound(what)),
        Err(e) => Err(e.into()),
    }
}

impl<S: NoteStore + MarkStore + HourStore> PlannerService<S> {
    pub fn new(sessions: SessionKeyCache, store: Arc<S>) -> Self {
        Self { sessions, store }
    }

    // ------------------------------------------------------------ notes

    pub async fn add_note(
        &self,
        session_id: &str,
        user_id: Uuid,
        draft: &NoteDraft,
    ) -> ServiceResult<Uuid> {
        let key = self.sessions.get(session_id).await?;
        let row = encrypt_note(&key, Uuid::new_v4(), user_id, draft)?;
        let id = row.id;
        self.store.insert_note(row)?;
        Ok(id)
    }

    pub async fn note(&self, session_id: &str, user_id: Uuid, id: Uuid) -> ServiceResult<Note> {
        let key = self.sessions.get(session_id).await?;
        let row = self
            .store
            .note_by_id(user_id, id)?
            .ok_or(ServiceError::NotFound("note"))?;
        Ok(decrypt_note(&key, &row)?)
    }

    pub async fn notes_on(
        &self,
        session_id: &str,
        user_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<Vec<Note>> {
        let key = self.sessions.get(session_id).await?;
        self.store
            .notes_on(user_id, date)?
            .iter()
            .map(|row| decrypt_note(&key, row).map_err(Into::into))
            .collect()
    }

    /// Days-of-month with notes in the range, for the calendar view.
    /// Reads only the cleartext date column but still requires an
    /// authenticated session.
    pub async fn note_days(
        &self,
        session_id: &str,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<u32>> {
        self.sessions.get(session_id).await?;
        Ok(self.store.note_days(user_id, start, end)?)
    }

    /// Re-encrypts the full note under its existing id; the column
    /// limits apply exactly as on create.
    pub async fn update_note(
        &self,
        session_id: &str,
        user_id: Uuid,
        id: Uuid,
        draft: &NoteDraft,
    ) -> ServiceResult<()> {
        let key = self.sessions.get(session_id).await?;
        self.store
            .note_by_id(user_id, id)?
            .ok_or(ServiceError::NotFound("note"))?;
        let row = encrypt_note(&key, id, user_id, draft)?;
        found(self.store.update_note(row), "note")
    }

    pub async fn delete_note(
        &self,
        session_id: &str,
        user_id: Uuid,
        id: Uuid,
    ) -> ServiceResult<()> {
        self.sessions.get(session_id).await?;
        found(self.store.delete_note(user_id, id), "note")
    }

    // ------------------------------------------------------------ marks

    pub async fn add_mark(
        &self,
        session_id: &str,
        user_id: Uuid,
        draft: &MarkDraft,
    ) -> ServiceResult<Uuid> {
        let key = self.sessions.get(session_id).await?;
        let row = encrypt_mark(&key, Uuid::new_v4(), user_id, draft)?;
        let id = row.id;
        self.store.insert_mark(row)?;
        Ok(id)
    }

    pub async fn marks(&self, session_id: &str, user_id: Uuid) -> ServiceResult<Vec<Mark>> {
        let key = self.sessions.get(session_id).await?;
        self.store
            .marks_for_user(user_id)?
            .iter()
            .map(|row| decrypt_mark(&key, row).map_err(Into::into))
            .collect()
    }

    pub async fn update_mark(
        &self,
        session_id: &str,
        user_id: Uuid,
        id: Uuid,
        draft: &MarkDraft,
    ) -> ServiceResult<()> {
        let key = self.sessions.get(session_id).await?;
        self.store
            .mark_by_id(user_id, id)?
            .ok_or(ServiceError::NotFound("mark"))?;
        let row = encrypt_mark(&key, id, user_id, draft)?;
        found(self.store.update_mark(row), "mark")
    }

    pub async fn delete_mark(
        &self,
        session_id: &str,
        user_id: Uuid,
        id: Uuid,
    ) -> ServiceResult<()> {
        self.sessions.get(session_id).await?;
        found(self.store.delete_mark(user_id, id), "mark")
    }

    // ------------------------------------------------------------ hours

    pub async fn add_hour(
        &self,
        session_id: &str,
        user_id: Uuid,
        draft: &StudyHourDraft,
    ) -> ServiceResult<Uuid> {
        let key = self.sessions.get(session_id).await?;
        let row = encrypt_hour(&key, Uuid::new_v4(), user_id, draft)?;
        let id = row.id;
        self.store.insert_hour(row)?;
        Ok(id)
    }

    pub async fn hours_for_day(
        &self,
        session_id: &str,
        user_id: Uuid,
        day: Weekday,
    ) -> ServiceResult<Vec<StudyHour>> {
        let key = self.sessions.get(session_id).await?;
        self.store
            .hours_for_day(user_id, day.number_from_monday() as u8)?
            .iter()
            .map(|row| decrypt_hour(&key, row).map_err(Into::into))
            .collect()
    }

    pub async fn delete_hour(
        &self,
        session_id: &str,
        user_id: Uuid,
        id: Uuid,
    ) -> ServiceResult<()> {
        self.sessions.get(session_id).await?;
        found(self.store.delete_hour(user_id, id), "hour")
    }
}
