//! Links backend client trait definition.

use linkstash_types::error::BackendError;
use linkstash_types::link::{Link, LinkCreate};

/// Client trait for the links backend service.
///
/// Implementations live in linkstash-infra (e.g., GrpcLinksClient).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro);
/// every future is Send so handlers stay spawnable.
pub trait LinksClient: Send + Sync {
    /// List every stored link.
    fn list_links(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Link>, BackendError>> + Send;

    /// Create a new link. The backend enforces id uniqueness.
    fn create_link(
        &self,
        link: LinkCreate,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Get a link by id.
    fn get_link(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Link, BackendError>> + Send;

    /// Replace a link. The target id travels inside the payload.
    fn update_link(
        &self,
        link: LinkCreate,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Delete a link by id.
    fn delete_link(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// List the links owned by a user.
    fn list_links_by_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Link>, BackendError>> + Send;
}
