//! Biome module
//!
//! Contains the biome catalogue, the world grid, and the neighbor-aware
//! generator.

pub mod generator;
pub mod grid;
pub mod kind;

pub use generator::{generate_world, generate_world_with_rng, GenerationParameters};
pub use grid::{Cell, WorldGrid, GRID_SIZE};
pub use kind::{legend, BiomeInfo, BiomeKind, LegendEntry};
