//! Waitlist entry aggregate and its insert form.

use chrono::{DateTime, Utc};

use super::entrant::{EntrantEmail, EntrantName};

/// A persisted signup.
///
/// Rows are created only through the submit operation and are never
/// updated or deleted. `id` is assigned by the store and increases with
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    /// Store-assigned surrogate key.
    pub id: i64,

    /// Trimmed display name.
    pub name: String,

    /// Normalized (trimmed, lower-cased) email. Unique across all entries.
    pub email: String,

    /// Server clock at insertion time.
    pub created_at: DateTime<Utc>,

    /// Remote address of the submitting client, when known.
    pub ip_address: Option<String>,

    /// `Referer` header of the submitting request, when present.
    pub referral_source: Option<String>,
}

/// Request context captured alongside a signup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupMetadata {
    /// Remote address of the client.
    pub ip_address: Option<String>,
    /// `Referer` header value.
    pub referral_source: Option<String>,
}

/// A validated signup ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    /// Validated name.
    pub name: EntrantName,
    /// Validated, normalized email.
    pub email: EntrantEmail,
    /// Insertion timestamp, taken from the server clock.
    pub created_at: DateTime<Utc>,
    /// Request context.
    pub metadata: SignupMetadata,
}

impl NewWaitlistEntry {
    /// Builds an insert form stamped with the current server time.
    #[must_use]
    pub fn new(name: EntrantName, email: EntrantEmail, metadata: SignupMetadata) -> Self {
        Self {
            name,
            email,
            created_at: Utc::now(),
            metadata,
        }
    }

    /// Materializes the entry with the id the store assigned.
    #[must_use]
    pub fn into_entry(self, id: i64) -> WaitlistEntry {
        WaitlistEntry {
            id,
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            created_at: self.created_at,
            ip_address: self.metadata.ip_address,
            referral_source: self.metadata.referral_source,
        }
    }
}
