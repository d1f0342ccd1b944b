//! Biomegen - A climate-driven biome world generator
//!
//! Grows a small world grid cell by cell, letting moisture, temperature,
//! and climate stability spread between neighbours, and serves the result
//! over a tiny HTTP API.

pub mod biome;
pub mod server;

// Re-export commonly used types
pub use biome::{generate_world, BiomeKind, GenerationParameters, WorldGrid};
pub use server::{ApiServer, ServerConfig};
