//! HTTP/REST layer of the gateway.
//!
//! Axum-based translation surface: decode the request, call the backend,
//! encode the outcome. No business state lives here.

pub mod error;
pub mod handlers;
pub mod router;
