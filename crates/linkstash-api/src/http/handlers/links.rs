//! Link handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use linkstash_core::client::{LinksClient, UsersClient};
use linkstash_types::link::{Link, LinkCreate};

use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /links - list every stored link.
pub async fn list_links<U, L>(
    State(state): State<AppState<U, L>>,
) -> Result<Json<Vec<Link>>, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let links = state.links.list_links().await?;
    Ok(Json(links))
}

/// POST /links - create a link.
pub async fn create_link<U, L>(
    State(state): State<AppState<U, L>>,
    payload: Result<Json<LinkCreate>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let Json(link) = payload?;
    state.links.create_link(link).await?;
    Ok(StatusCode::CREATED)
}

/// GET /links/{id} - get a link by id.
pub async fn get_link<U, L>(
    State(state): State<AppState<U, L>>,
    Path(id): Path<String>,
) -> Result<Json<Link>, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let link = state.links.get_link(&id).await?;
    Ok(Json(link))
}

/// PUT /links/{id} - replace a link.
///
/// The replacement id travels in the body, matching the backend request
/// shape.
pub async fn update_link<U, L>(
    State(state): State<AppState<U, L>>,
    Path(_id): Path<String>,
    payload: Result<Json<LinkCreate>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let Json(link) = payload?;
    state.links.update_link(link).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /links/{id} - delete a link by id.
pub async fn delete_link<U, L>(
    State(state): State<AppState<U, L>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    state.links.delete_link(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /links/user/{user_id} - list the links owned by a user.
pub async fn list_links_by_user<U, L>(
    State(state): State<AppState<U, L>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Link>>, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let links = state.links.list_links_by_user(&user_id).await?;
    Ok(Json(links))
}
