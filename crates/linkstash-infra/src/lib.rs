//! Infrastructure implementations for the linkstash gateway.
//!
//! Currently a single concern: tonic-based clients for the users and links
//! backend services, implementing the traits from linkstash-core.

pub mod grpc;
