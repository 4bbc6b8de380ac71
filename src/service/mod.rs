//! Service layer: business logic orchestration.
//!
//! [`WaitlistService`] validates and normalizes signups, enforces email
//! uniqueness, and delegates storage to a [`crate::persistence::WaitlistStore`].

pub mod waitlist_service;

pub use waitlist_service::{SignupReceipt, WaitlistService};
