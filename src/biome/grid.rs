//! World grid data structures
//!
//! The fixed 10x10 grid of biome-assigned cells produced by the generator.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::kind::{BiomeInfo, BiomeKind};

/// Side length of the generated world grid.
pub const GRID_SIZE: i32 = 10;

/// A single cell of the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    /// Assigned biome kind
    #[serde(rename = "type")]
    pub kind: BiomeKind,
    /// Display metadata, denormalized so consumers need no second lookup
    pub info: BiomeInfo,
}

impl Cell {
    pub fn new(x: i32, y: i32, kind: BiomeKind) -> Self {
        Self {
            x,
            y,
            kind,
            info: kind.info(),
        }
    }
}

/// A fully populated 10x10 world map.
///
/// Built cell by cell inside the generator and only handed out once every
/// cell has been assigned; callers never observe a partial grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    cells: Vec<Cell>,
}

impl WorldGrid {
    /// Create a grid with every cell at its own coordinates.
    ///
    /// Cells start on a placeholder kind; the generator assigns all of them
    /// before the grid leaves the crate.
    pub(crate) fn new() -> Self {
        let mut cells = Vec::with_capacity((GRID_SIZE * GRID_SIZE) as usize);
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                cells.push(Cell::new(x, y, BiomeKind::Forest));
            }
        }
        Self { cells }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * GRID_SIZE + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < GRID_SIZE && y >= 0 && y < GRID_SIZE
    }

    /// Get the cell at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Assign a kind (and its metadata) to the cell at (x, y)
    pub(crate) fn set_kind(&mut self, x: i32, y: i32, kind: BiomeKind) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.cells[idx].kind = kind;
            self.cells[idx].info = kind.info();
        }
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate the grid one row at a time, north to south
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_SIZE as usize)
    }
}

/// Grids serialize as nested rows: ten arrays of ten cell objects.
impl Serialize for WorldGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(GRID_SIZE as usize))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
