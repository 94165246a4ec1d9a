//! Lithium - a minimal JSON responder service
//!
//! The service answers `GET /` with the fixed document `{"hello":"there"}`.
//! Everything else in this crate is the runtime around that route:
//! - Layered configuration (TOML file + `LITHIUM_*` environment)
//! - Socket binding with graceful shutdown
//! - Request tracing via tower-http

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use error::{Error, Result};
