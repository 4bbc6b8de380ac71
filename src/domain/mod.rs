//! Domain layer: the waitlist entry and its validated inputs.
//!
//! Everything that reaches the store has passed through
//! [`EntrantName::parse`] and [`EntrantEmail::parse`], so the store never
//! sees an un-normalized email.

pub mod entrant;
pub mod waitlist_entry;

pub use entrant::{EntrantEmail, EntrantName};
pub use waitlist_entry::{NewWaitlistEntry, SignupMetadata, WaitlistEntry};
