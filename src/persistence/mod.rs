//! Persistence layer: the `waitlist_entries` store.
//!
//! [`WaitlistStore`] is the seam between the service and storage. The
//! production implementation is [`postgres::PostgresStore`]
//! (`sqlx::PgPool`); [`memory::InMemoryStore`] backs local runs with
//! persistence disabled and the test suite.
//!
//! The `UNIQUE` constraint on `email` is the authoritative duplicate guard.
//! Implementations report a violation as [`WaitlistError::DuplicateEmail`]
//! so that a lost check-then-insert race still produces a 409.

pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{EntrantEmail, NewWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

/// Storage operations required by the waitlist service.
#[async_trait]
pub trait WaitlistStore: Send + Sync + fmt::Debug {
    /// Looks up an entry by normalized email.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::PersistenceError`] on store failure.
    async fn find_by_email(
        &self,
        email: &EntrantEmail,
    ) -> Result<Option<WaitlistEntry>, WaitlistError>;

    /// Inserts a new entry and returns it with its assigned id, together
    /// with the total entry count read after the insert.
    ///
    /// The insert and the count form one unit: if either fails nothing is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::DuplicateEmail`] if the email is already
    /// stored and [`WaitlistError::PersistenceError`] on store failure.
    async fn insert(
        &self,
        entry: &NewWaitlistEntry,
    ) -> Result<(WaitlistEntry, i64), WaitlistError>;

    /// Returns the total number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::PersistenceError`] on store failure.
    async fn count(&self) -> Result<i64, WaitlistError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::PersistenceError`] if it is not.
    async fn ping(&self) -> Result<(), WaitlistError>;
}
