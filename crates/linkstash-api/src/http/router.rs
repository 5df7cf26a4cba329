//! Route table aggregating the resource handlers.
//!
//! This is the dispatcher: every contract operation is registered exactly
//! once and delegates to exactly one handler. Registration doubles as the
//! completeness check, since an unrouted operation has no path and a
//! double-routed one panics at router construction.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use linkstash_core::client::{LinksClient, UsersClient};

use crate::http::handlers::{links, users};
use crate::state::AppState;

/// Build the complete REST router over the given backend clients.
pub fn build_router<U, L>(state: AppState<U, L>) -> Router
where
    U: UsersClient + 'static,
    L: LinksClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/links",
            get(links::list_links::<U, L>).post(links::create_link::<U, L>),
        )
        .route("/links/user/{user_id}", get(links::list_links_by_user::<U, L>))
        .route(
            "/links/{id}",
            get(links::get_link::<U, L>)
                .put(links::update_link::<U, L>)
                .delete(links::delete_link::<U, L>),
        )
        .route(
            "/users",
            get(users::list_users::<U, L>).post(users::create_user::<U, L>),
        )
        .route(
            "/users/{id}",
            get(users::get_user::<U, L>)
                .put(users::update_user::<U, L>)
                .delete(users::delete_user::<U, L>),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
