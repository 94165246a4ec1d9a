//! HTTP API surface

use axum::{routing::get, Router};

pub mod handlers;

pub use handlers::Greeting;

/// Build the API router.
///
/// Only `GET /` is registered; unknown paths and other methods fall through
/// to axum's default 404 and 405 responses.
pub fn create_router() -> Router {
    Router::new().route("/", get(handlers::hello))
}
