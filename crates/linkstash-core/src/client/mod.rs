//! Client trait definitions, one per resource domain.

mod links;
mod users;

pub use links::LinksClient;
pub use users::UsersClient;
