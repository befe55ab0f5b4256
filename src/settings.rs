use std::ops::RangeInclusive;

use egui::vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::grid::{BRUSH_SIZES, DEFAULT_BRUSH_SIZE, Grid};
use crate::renderer::GridOverlay;

/// Cell sizes offered by the cell-size selector.
pub const CELL_SIZES: [u32; 5] = BRUSH_SIZES;

pub const GRID_THICKNESS_RANGE: RangeInclusive<f32> = 1.0..=4.0;

/// Editor configuration that survives restarts. The tiles themselves are
/// never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    /// Canvas width and height in pixels
    pub canvas_size: [f32; 2],
    pub cell_size: u32,
    pub brush_size: u32,
    pub show_grid: bool,
    pub grid_thickness: f32,
    pub selected_color: Color,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_size: [800.0, 640.0],
            cell_size: 32,
            brush_size: DEFAULT_BRUSH_SIZE,
            show_grid: true,
            grid_thickness: 1.0,
            selected_color: Color::RED,
        }
    }
}

impl EditorSettings {
    /// Replaces values outside their allowed sets with defaults.
    ///
    /// Stored settings may come from an older build, so this runs on restore.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.canvas_size.iter().any(|extent| !extent.is_finite() || *extent <= 0.0) {
            log::warn!("Ignoring stored canvas size {:?}", self.canvas_size);
            self.canvas_size = defaults.canvas_size;
        }
        if !CELL_SIZES.contains(&self.cell_size) {
            log::warn!("Ignoring stored cell size {}", self.cell_size);
            self.cell_size = defaults.cell_size;
        }
        if !BRUSH_SIZES.contains(&self.brush_size) {
            log::warn!("Ignoring stored brush size {}", self.brush_size);
            self.brush_size = defaults.brush_size;
        }
        if !GRID_THICKNESS_RANGE.contains(&self.grid_thickness) {
            self.grid_thickness = self
                .grid_thickness
                .clamp(*GRID_THICKNESS_RANGE.start(), *GRID_THICKNESS_RANGE.end());
            if self.grid_thickness.is_nan() {
                self.grid_thickness = defaults.grid_thickness;
            }
        }
        self
    }

    /// Builds a fresh grid with these dimensions and brush size.
    pub fn build_grid(&self) -> Grid {
        let [width, height] = self.canvas_size;
        let cell = self.cell_size as f32;
        let mut grid = Grid::new(vec2(width, height), vec2(cell, cell));
        if let Err(err) = grid.set_brush_size(self.brush_size) {
            log::warn!("{err}; keeping brush size {}", grid.brush_size());
        }
        grid
    }

    pub fn overlay(&self) -> GridOverlay {
        GridOverlay {
            visible: self.show_grid,
            thickness: self.grid_thickness,
        }
    }
}
