//! Validated signup inputs.
//!
//! [`EntrantName`] and [`EntrantEmail`] can only be built through their
//! `parse` constructors, so any value of these types is already trimmed,
//! normalized, and within the column limits of the `waitlist_entries` table.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::WaitlistError;

/// Maximum name length in characters (`VARCHAR(100)`).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum email length in characters (`VARCHAR(120)`).
pub const MAX_EMAIL_LEN: usize = 120;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Display name of a waitlist entrant, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrantName(String);

impl EntrantName {
    /// Trims `raw` and checks it is non-empty and at most
    /// [`MAX_NAME_LEN`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::MissingFields`] for a blank name and
    /// [`WaitlistError::InvalidName`] for an over-long one.
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(WaitlistError::MissingFields);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(WaitlistError::InvalidName(format!(
                "must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalized email address: trimmed, lower-cased, syntactically valid.
///
/// Two signups are duplicates exactly when their `EntrantEmail`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntrantEmail(String);

impl EntrantEmail {
    /// Trims and lower-cases `raw`, then checks it against the accepted
    /// email syntax (`local@domain.tld`, TLD of two or more letters).
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::MissingFields`] for a blank email and
    /// [`WaitlistError::InvalidEmail`] when the syntax or length check fails.
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let email = raw.trim().to_lowercase();
        if email.is_empty() {
            return Err(WaitlistError::MissingFields);
        }
        if email.chars().count() > MAX_EMAIL_LEN || !EMAIL_PATTERN.is_match(&email) {
            return Err(WaitlistError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Returns the normalized email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
