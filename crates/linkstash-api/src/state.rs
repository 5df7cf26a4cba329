//! Application state wiring the backend clients.
//!
//! The state is generic over the client traits so router-level tests can pin
//! deterministic doubles; production pins the tonic implementations via
//! [`GrpcAppState`].

use std::sync::Arc;

use linkstash_core::client::{LinksClient, UsersClient};
use linkstash_infra::grpc::{GrpcLinksClient, GrpcUsersClient};

/// Shared state: one client handle per resource domain.
///
/// Everything else the gateway touches is request-local.
pub struct AppState<U, L> {
    pub users: Arc<U>,
    pub links: Arc<L>,
}

impl<U, L> Clone for AppState<U, L> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            links: Arc::clone(&self.links),
        }
    }
}

impl<U: UsersClient, L: LinksClient> AppState<U, L> {
    pub fn new(users: U, links: L) -> Self {
        Self {
            users: Arc::new(users),
            links: Arc::new(links),
        }
    }
}

/// Production state pinned to the gRPC client implementations.
pub type GrpcAppState = AppState<GrpcUsersClient, GrpcLinksClient>;
