//! In-memory store for tests and local development.

use crate::store::{
    HourStore, MarkStore, NoteStore, StoreError, StoreResult, UserRow, UserStore,
};
use chrono::{Datelike, NaiveDate};
use satchel_records::{HourRow, MarkRow, NoteRow};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, UserRow>,
    notes: HashMap<Uuid, NoteRow>,
    marks: HashMap<Uuid, MarkRow>,
    hours: HashMap<Uuid, HourRow>,
}

/// HashMap-backed implementation of every storage trait. Cheap to
/// clone; all clones share one state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn create_user(&self, row: UserRow) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .users
            .values()
            .any(|u| u.email_digest == row.email_digest)
        {
            return Err(StoreError::Conflict("email digest already present".to_string()));
        }
        inner.users.insert(row.id, row);
        Ok(())
    }

    fn user_by_email_digest(&self, digest: &str) -> StoreResult<Option<UserRow>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .users
            .values()
            .find(|u| u.email_digest == digest)
            .cloned())
    }

    fn user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.get(&id).cloned())
    }

    fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.notes.retain(|_, n| n.user_id != id);
        inner.marks.retain(|_, m| m.user_id != id);
        inner.hours.retain(|_, h| h.user_id != id);
        Ok(())
    }
}

impl NoteStore for MemoryStore {
    fn insert_note(&self, row: NoteRow) -> StoreResult<()> {
        self.inner.lock().unwrap().notes.insert(row.id, row);
        Ok(())
    }

    fn note_by_id(&self, user_id: Uuid, id: Uuid) -> StoreResult<Option<NoteRow>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .notes
            .get(&id)
            .filter(|n| n.user_id == user_id)
            .cloned())
    }

    fn notes_on(&self, user_id: Uuid, date: NaiveDate) -> StoreResult<Vec<NoteRow>> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<NoteRow> = inner
            .notes
            .values()
            .filter(|n| n.user_id == user_id && n.date == date)
            .cloned()
            .collect();
        rows.sort_by_key(|n| n.id);
        Ok(rows)
    }

    fn note_days(&self, user_id: Uuid, start: NaiveDate, end: NaiveDate) -> StoreResult<Vec<u32>> {
        let inner = self.inner.lock().unwrap();
        let mut days: Vec<u32> = inner
            .notes
            .values()
            .filter(|n| n.user_id == user_id && n.date >= start && n.date <= end)
            .map(|n| n.date.day())
            .collect();
        days.sort_unstable();
        days.dedup();
        Ok(days)
    }

    fn update_note(&self, row: NoteRow) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.notes.get_mut(&row.id) {
            Some(existing) if existing.user_id == row.user_id => {
                *existing = row;
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }

    fn delete_note(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.notes.get(&id) {
            Some(n) if n.user_id == user_id => {
                inner.notes.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}

impl MarkStore for MemoryStore {
    fn insert_mark(&self, row: MarkRow) -> StoreResult<()> {
        self.inner.lock().unwrap().marks.insert(row.id, row);
        Ok(())
    }

    fn mark_by_id(&self, user_id: Uuid, id: Uuid) -> StoreResult<Option<MarkRow>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .marks
            .get(&id)
            .filter(|m| m.user_id == user_id)
            .cloned())
    }

    fn marks_for_user(&self, user_id: Uuid) -> StoreResult<Vec<MarkRow>> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<MarkRow> = inner
            .marks
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    fn update_mark(&self, row: MarkRow) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.marks.get_mut(&row.id) {
            Some(existing) if existing.user_id == row.user_id => {
                *existing = row;
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }

    fn delete_mark(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.marks.get(&id) {
            Some(m) if m.user_id == user_id => {
                inner.marks.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}

impl HourStore for MemoryStore {
    fn insert_hour(&self, row: HourRow) -> StoreResult<()> {
        self.inner.lock().unwrap().hours.insert(row.id, row);
        Ok(())
    }

    fn hours_for_day(&self, user_id: Uuid, day: u8) -> StoreResult<Vec<HourRow>> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<HourRow> = inner
            .hours
            .values()
            .filter(|h| h.user_id == user_id && h.day == day)
            .cloned()
            .collect();
        rows.sort_by_key(|h| h.id);
        Ok(rows)
    }

    fn delete_hour(&self, user_id: Uuid, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.hours.get(&id) {
            Some(h) if h.user_id == user_id => {
                inner.hours.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}
