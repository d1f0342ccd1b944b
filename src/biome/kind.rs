//! Biome catalogue
//!
//! The closed set of biome kinds and their display metadata.

use serde::{Deserialize, Serialize};

/// The terrain categories a cell can be assigned.
///
/// Declaration order matters: cumulative-distribution sampling scans
/// kinds in this order, and the legend is emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiomeKind {
    Forest,
    Desert,
    Ocean,
    Mountain,
    Plains,
}

/// Display metadata for a biome kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiomeInfo {
    /// Display name
    pub name: &'static str,
    /// CSS color code used by frontends to paint the cell
    pub color: &'static str,
}

impl BiomeKind {
    /// Number of biome kinds.
    pub const COUNT: usize = 5;

    /// All kinds, in declaration order.
    pub const ALL: [BiomeKind; Self::COUNT] = [
        BiomeKind::Forest,
        BiomeKind::Desert,
        BiomeKind::Ocean,
        BiomeKind::Mountain,
        BiomeKind::Plains,
    ];

    /// Get the display metadata for this kind
    pub fn info(&self) -> BiomeInfo {
        match self {
            BiomeKind::Forest => BiomeInfo {
                name: "Forest",
                color: "#228B22",
            },
            BiomeKind::Desert => BiomeInfo {
                name: "Desert",
                color: "#F0E68C",
            },
            BiomeKind::Ocean => BiomeInfo {
                name: "Ocean",
                color: "#4682B4",
            },
            BiomeKind::Mountain => BiomeInfo {
                name: "Mountain",
                color: "#A9A9A9",
            },
            BiomeKind::Plains => BiomeInfo {
                name: "Plains",
                color: "#90EE90",
            },
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Position of this kind in [`BiomeKind::ALL`], used to index score tables
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One row of the biome legend
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendEntry {
    pub kind: BiomeKind,
    pub info: BiomeInfo,
}

/// The full legend, one entry per kind in declaration order.
///
/// This is the read-only kind-to-metadata table served to frontends for
/// legend rendering; it never changes at runtime.
pub fn legend() -> [LegendEntry; BiomeKind::COUNT] {
    BiomeKind::ALL.map(|kind| LegendEntry {
        kind,
        info: kind.info(),
    })
}
