//! Database row models.

use chrono::{DateTime, Utc};

use crate::domain::WaitlistEntry;

/// A row from the `waitlist_entries` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WaitlistEntryRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Entrant name.
    pub name: String,
    /// Normalized email (`UNIQUE`).
    pub email: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
    /// Client address, nullable.
    pub ip_address: Option<String>,
    /// Referer header, nullable.
    pub referral_source: Option<String>,
}

impl From<WaitlistEntryRow> for WaitlistEntry {
    fn from(row: WaitlistEntryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            ip_address: row.ip_address,
            referral_source: row.referral_source,
        }
    }
}
