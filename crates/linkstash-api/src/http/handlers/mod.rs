//! Resource handlers, one module per domain.
//!
//! Every handler is the same three-step pipeline: decode the body (if any),
//! make exactly one backend call, encode the outcome.

pub mod links;
pub mod users;
