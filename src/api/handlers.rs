//! API handlers

use axum::Json;
use serde::Serialize;

/// Fixed payload returned from the root route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub hello: &'static str,
}

impl Greeting {
    pub const fn new() -> Self {
        Self { hello: "there" }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Respond with `{"hello":"there"}`, ignoring everything about the request.
pub async fn hello() -> Json<Greeting> {
    tracing::debug!("serving greeting");
    Json(Greeting::new())
}
