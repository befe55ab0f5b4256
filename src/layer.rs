use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;

/// A layer number. Layer numbers start at 1 and are recycled: adding a layer
/// takes the smallest number not currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl LayerId {
    /// The first layer, created along with the grid.
    pub const FIRST: Self = Self(1);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Gets the underlying layer number
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one painted cell within one brush-size channel.
///
/// Each brush size paints its own independent grid of cells, so the same
/// `(row, col)` under two brush sizes names two different tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKey {
    pub brush_size: u32,
    pub row: u32,
    pub col: u32,
}

impl TileKey {
    pub fn new(brush_size: u32, row: u32, col: u32) -> Self {
        Self { brush_size, row, col }
    }
}

/// A single paintable plane of tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// Stable identity for UI bookkeeping; unlike the layer number it is never reused
    uid: Uuid,
    cells: HashMap<TileKey, Color>,
    visible: bool,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl TileLayer {
    /// Creates an empty, visible layer.
    pub fn new() -> Self {
        Self {
            uid: Uuid::new_v4(),
            cells: HashMap::new(),
            visible: true,
        }
    }

    pub fn uid(&self) -> Uuid {
        self.uid
    }

    /// Stores `color` for the tile, replacing whatever was there.
    ///
    /// No bounds check happens here; the grid decides which coordinates are
    /// paintable.
    pub fn set_tile(&mut self, brush_size: u32, row: u32, col: u32, color: Color) {
        self.cells.insert(TileKey::new(brush_size, row, col), color);
    }

    /// Returns the stored color, or [`Color::TRANSPARENT`] for a tile never written.
    pub fn get_tile(&self, brush_size: u32, row: u32, col: u32) -> Color {
        self.cells
            .get(&TileKey::new(brush_size, row, col))
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn visibility(&self) -> bool {
        self.visible
    }

    /// True if any tile has been written under this brush size.
    pub fn has_channel(&self, brush_size: u32) -> bool {
        self.cells.keys().any(|key| key.brush_size == brush_size)
    }

    /// Number of stored tiles, including ones erased back to transparent.
    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
