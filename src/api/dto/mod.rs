//! Data Transfer Objects for REST request/response serialization.

pub mod waitlist_dto;

pub use waitlist_dto::*;
