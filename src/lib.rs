//! # waitlist-gateway
//!
//! REST backend that collects waitlist signups: it accepts a name and
//! email, validates and deduplicates the email, stores the entry, and
//! reports how many people are waiting.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── WaitlistService (service/)
//!     ├── EntrantName / EntrantEmail (domain/)
//!     │
//!     └── WaitlistStore (persistence/)
//!             ├── PostgreSQL
//!             └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
