//! Backend capability traits for the linkstash gateway.
//!
//! The gateway talks to its backends only through the narrow client traits
//! defined here: one method per backend operation, each mapping to exactly
//! one RPC. Concrete transports live in linkstash-infra; tests substitute
//! deterministic doubles.

pub mod client;
