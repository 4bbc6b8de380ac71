//! PostgreSQL implementation of the waitlist store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};

use super::WaitlistStore;
use super::models::WaitlistEntryRow;
use crate::config::WaitlistConfig;
use crate::domain::{EntrantEmail, NewWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
///
/// Each operation checks a connection out of the pool and returns it when
/// done; nothing is held between requests.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool using the database settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`WaitlistError::PersistenceError`] if the database cannot
    /// be reached.
    pub async fn connect(config: &WaitlistConfig) -> Result<Self, WaitlistError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(config.database_connect_timeout())
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded migrations under `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns a [`WaitlistError::PersistenceError`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), WaitlistError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl WaitlistStore for PostgresStore {
    async fn find_by_email(
        &self,
        email: &EntrantEmail,
    ) -> Result<Option<WaitlistEntry>, WaitlistError> {
        let row = sqlx::query_as::<_, WaitlistEntryRow>(
            "SELECT id, name, email, created_at, ip_address, referral_source \
             FROM waitlist_entries WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WaitlistEntry::from))
    }

    async fn insert(
        &self,
        entry: &NewWaitlistEntry,
    ) -> Result<(WaitlistEntry, i64), WaitlistError> {
        let mut tx = self.pool.begin().await?;

        match insert_and_count(&mut tx, entry).await {
            Ok((id, count)) => {
                tx.commit().await?;
                Ok((entry.clone().into_entry(id), count))
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed insert failed");
                }
                Err(err.into())
            }
        }
    }

    async fn count(&self) -> Result<i64, WaitlistError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), WaitlistError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Inserts `entry` and counts all rows inside the same transaction.
async fn insert_and_count(
    tx: &mut Transaction<'_, Postgres>,
    entry: &NewWaitlistEntry,
) -> Result<(i64, i64), sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO waitlist_entries (name, email, created_at, ip_address, referral_source) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(entry.name.as_str())
    .bind(entry.email.as_str())
    .bind(entry.created_at)
    .bind(entry.metadata.ip_address.as_deref())
    .bind(entry.metadata.referral_source.as_deref())
    .fetch_one(&mut **tx)
    .await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist_entries")
        .fetch_one(&mut **tx)
        .await?;

    Ok((id, count))
}
