//! tonic client for the users backend service.

use tonic::transport::{Channel, Endpoint};

use linkstash_core::client::UsersClient;
use linkstash_types::error::BackendError;
use linkstash_types::user::{User, UserCreate};

use super::{proto, unary};

/// gRPC client for the users service.
#[derive(Clone)]
pub struct GrpcUsersClient {
    channel: Channel,
}

impl GrpcUsersClient {
    /// Connect to the users backend at the given endpoint URI.
    pub async fn connect(endpoint: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.to_string())?.connect().await?;
        Ok(Self { channel })
    }

    /// Wrap an already established channel.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl UsersClient for GrpcUsersClient {
    async fn create_user(&self, user: UserCreate) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.UsersService/CreateUser",
            proto::CreateUserRequest {
                id: user.id,
                username: user.username,
                password: user.password,
            },
        )
        .await?;
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<User, BackendError> {
        let resp: proto::User = unary(
            &self.channel,
            "/linkstash.v1.UsersService/GetUser",
            proto::GetUserRequest { id: id.to_string() },
        )
        .await?;
        Ok(user_from_proto(resp))
    }

    async fn update_user(&self, user: UserCreate) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.UsersService/UpdateUser",
            proto::UpdateUserRequest {
                id: user.id,
                username: user.username,
                password: user.password,
            },
        )
        .await?;
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.UsersService/DeleteUser",
            proto::DeleteUserRequest { id: id.to_string() },
        )
        .await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, BackendError> {
        let resp: proto::ListUsersResponse = unary(
            &self.channel,
            "/linkstash.v1.UsersService/ListUsers",
            proto::Empty {},
        )
        .await?;
        Ok(resp.users.into_iter().map(user_from_proto).collect())
    }
}

/// Field-by-field copy from the wire message.
fn user_from_proto(user: proto::User) -> User {
    User {
        id: user.id,
        username: user.username,
        password: user.password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_proto_copies_fields() {
        let user = user_from_proto(proto::User {
            id: "123".into(),
            username: "testuser".into(),
            password: "testpass".into(),
        });
        assert_eq!(user.id, "123");
        assert_eq!(user.username, "testuser");
        assert_eq!(user.password, "testpass");
    }
}
