//! HTTP API module
//!
//! Thin transport over the generator: routing, form-parameter parsing
//! with defaults, CORS headers, and JSON encoding.

pub mod config;
pub mod http;
pub mod request;

pub use config::ServerConfig;
pub use http::{ApiServer, ServerError};
