//! User handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use linkstash_core::client::{LinksClient, UsersClient};
use linkstash_types::user::{User, UserCreate};

use crate::http::error::ApiError;
use crate::state::AppState;

/// POST /users - create a user.
pub async fn create_user<U, L>(
    State(state): State<AppState<U, L>>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let Json(user) = payload?;
    state.users.create_user(user).await?;
    Ok(StatusCode::CREATED)
}

/// GET /users/{id} - get a user by id.
pub async fn get_user<U, L>(
    State(state): State<AppState<U, L>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let user = state.users.get_user(&id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - replace a user.
///
/// The replacement id travels in the body, matching the backend request
/// shape.
pub async fn update_user<U, L>(
    State(state): State<AppState<U, L>>,
    Path(_id): Path<String>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let Json(user) = payload?;
    state.users.update_user(user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{id} - delete a user by id.
pub async fn delete_user<U, L>(
    State(state): State<AppState<U, L>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    state.users.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users - list every user account.
pub async fn list_users<U, L>(
    State(state): State<AppState<U, L>>,
) -> Result<Json<Vec<User>>, ApiError>
where
    U: UsersClient,
    L: LinksClient,
{
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
