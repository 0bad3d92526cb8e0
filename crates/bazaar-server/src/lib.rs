//! # Bazaar Server
//!
//! HTTP API surface for the Bazaar demo service: path and query parameter
//! handling, validated request bodies, multipart upload, a server-rendered
//! home page and in-memory stores behind the handlers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod handlers;
pub mod server;
pub mod telemetry;

pub use server::{AppState, Server, ServerConfig};
pub use telemetry::{init_logging, TelemetryConfig};
