//! In-process waitlist store.
//!
//! Entries live in a `tokio::sync::RwLock<Vec<_>>`; the vector index plus
//! one is the entry id, so ids increase with insertion order just like a
//! `BIGSERIAL` column. The write lock covers the duplicate check and the
//! push, which gives the same uniqueness guarantee as the `UNIQUE`
//! constraint in PostgreSQL.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::WaitlistStore;
use crate::domain::{EntrantEmail, NewWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

/// Waitlist store kept in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<Vec<WaitlistEntry>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WaitlistStore for InMemoryStore {
    async fn find_by_email(
        &self,
        email: &EntrantEmail,
    ) -> Result<Option<WaitlistEntry>, WaitlistError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.email == email.as_str()).cloned())
    }

    async fn insert(
        &self,
        entry: &NewWaitlistEntry,
    ) -> Result<(WaitlistEntry, i64), WaitlistError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.email == entry.email.as_str()) {
            return Err(WaitlistError::DuplicateEmail);
        }

        // Count is taken under the same write lock, so it includes this row.
        let id = i64::try_from(entries.len())
            .map_err(|_| WaitlistError::Internal("entry id overflow".to_string()))?
            .saturating_add(1);
        let stored = entry.clone().into_entry(id);
        entries.push(stored.clone());
        Ok((stored, id))
    }

    async fn count(&self) -> Result<i64, WaitlistError> {
        let entries = self.entries.read().await;
        i64::try_from(entries.len())
            .map_err(|_| WaitlistError::Internal("entry count overflow".to_string()))
    }

    async fn ping(&self) -> Result<(), WaitlistError> {
        Ok(())
    }
}
