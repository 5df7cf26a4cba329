//! Users backend client trait definition.

use linkstash_types::error::BackendError;
use linkstash_types::user::{User, UserCreate};

/// Client trait for the users backend service.
///
/// Update and list are part of the backend contract even though the current
/// REST frontend traffic rarely exercises them.
pub trait UsersClient: Send + Sync {
    /// Create a new user. The backend enforces id and username uniqueness.
    fn create_user(
        &self,
        user: UserCreate,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Get a user by id.
    fn get_user(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<User, BackendError>> + Send;

    /// Replace a user. The target id travels inside the payload.
    fn update_user(
        &self,
        user: UserCreate,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Delete a user by id.
    fn delete_user(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// List every user account.
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, BackendError>> + Send;
}
