//! tonic client for the links backend service.

use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};

use linkstash_core::client::LinksClient;
use linkstash_types::error::{BackendCode, BackendError};
use linkstash_types::link::{Link, LinkCreate};

use super::{proto, unary};

/// gRPC client for the links service.
///
/// Holds a `Channel`, which tonic documents as safe to clone and share
/// across concurrent in-flight requests.
#[derive(Clone)]
pub struct GrpcLinksClient {
    channel: Channel,
}

impl GrpcLinksClient {
    /// Connect to the links backend at the given endpoint URI.
    pub async fn connect(endpoint: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.to_string())?.connect().await?;
        Ok(Self { channel })
    }

    /// Wrap an already established channel.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

impl LinksClient for GrpcLinksClient {
    async fn list_links(&self) -> Result<Vec<Link>, BackendError> {
        let resp: proto::ListLinksResponse = unary(
            &self.channel,
            "/linkstash.v1.LinksService/ListLinks",
            proto::Empty {},
        )
        .await?;
        resp.links.into_iter().map(link_from_proto).collect()
    }

    async fn create_link(&self, link: LinkCreate) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.LinksService/CreateLink",
            proto::CreateLinkRequest {
                id: link.id,
                title: link.title,
                url: link.url,
                images: link.images,
                tags: link.tags,
                user_id: link.user_id,
            },
        )
        .await?;
        Ok(())
    }

    async fn get_link(&self, id: &str) -> Result<Link, BackendError> {
        let resp: proto::Link = unary(
            &self.channel,
            "/linkstash.v1.LinksService/GetLink",
            proto::GetLinkRequest { id: id.to_string() },
        )
        .await?;
        link_from_proto(resp)
    }

    async fn update_link(&self, link: LinkCreate) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.LinksService/UpdateLink",
            proto::UpdateLinkRequest {
                id: link.id,
                title: link.title,
                url: link.url,
                images: link.images,
                tags: link.tags,
                user_id: link.user_id,
            },
        )
        .await?;
        Ok(())
    }

    async fn delete_link(&self, id: &str) -> Result<(), BackendError> {
        let _: proto::Empty = unary(
            &self.channel,
            "/linkstash.v1.LinksService/DeleteLink",
            proto::DeleteLinkRequest { id: id.to_string() },
        )
        .await?;
        Ok(())
    }

    async fn list_links_by_user(&self, user_id: &str) -> Result<Vec<Link>, BackendError> {
        let resp: proto::ListLinksResponse = unary(
            &self.channel,
            "/linkstash.v1.LinksService/GetLinksByUser",
            proto::GetLinksByUserRequest {
                user_id: user_id.to_string(),
            },
        )
        .await?;
        resp.links.into_iter().map(link_from_proto).collect()
    }
}

/// Field-by-field copy from the wire message, parsing timestamps.
fn link_from_proto(link: proto::Link) -> Result<Link, BackendError> {
    Ok(Link {
        created_at: parse_timestamp("created_at", &link.created_at)?,
        updated_at: parse_timestamp("updated_at", &link.updated_at)?,
        id: link.id,
        title: link.title,
        url: link.url,
        images: link.images,
        tags: link.tags,
        user_id: link.user_id,
    })
}

fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, BackendError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            BackendError::new(
                BackendCode::Internal,
                format!("backend sent invalid {field} timestamp {raw:?}: {e}"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proto_link() -> proto::Link {
        proto::Link {
            id: "123".into(),
            title: "Test Link".into(),
            url: "http://example.com".into(),
            images: vec!["http://example.com/image1.jpg".into()],
            tags: vec!["test".into()],
            user_id: "user1".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-02T12:30:00Z".into(),
        }
    }

    #[test]
    fn test_link_from_proto_copies_fields() {
        let link = link_from_proto(sample_proto_link()).unwrap();
        assert_eq!(link.id, "123");
        assert_eq!(link.user_id, "user1");
        assert_eq!(link.images, vec!["http://example.com/image1.jpg"]);
        assert_eq!(link.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_link_from_proto_rejects_bad_timestamp() {
        let mut raw = sample_proto_link();
        raw.updated_at = "yesterday".into();
        let err = link_from_proto(raw).unwrap_err();
        assert_eq!(err.code, BackendCode::Internal);
        assert!(err.message.contains("updated_at"));
    }
}
