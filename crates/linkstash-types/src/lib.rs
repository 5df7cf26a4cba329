//! Shared domain types for the linkstash gateway.
//!
//! This crate contains the REST-facing resource types (Link, User, their
//! create payloads) and the backend error vocabulary shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod link;
pub mod user;
