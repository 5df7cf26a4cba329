use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored link as returned by the backend and exposed over REST.
///
/// Identity is the `id` field; uniqueness is enforced by the backend, not
/// the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Preview image URLs attached to the link.
    pub images: Vec<String>,
    /// User-managed freeform tags.
    pub tags: Vec<String>,
    /// Id of the owning user.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a link.
///
/// Mirrors the mutable fields of [`Link`]; timestamps are assigned by the
/// backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCreate {
    pub id: String,
    pub title: String,
    pub url: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub user_id: String,
}
