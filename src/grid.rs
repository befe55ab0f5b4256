use std::collections::BTreeMap;

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::color::Color;
use crate::error::{GridError, GridResult};
use crate::layer::{LayerId, TileLayer};
use crate::renderer::{DrawCommand, GRID_LINE_COLOR, GridOverlay};

/// Brush sizes in pixels. Every size paints its own channel of tiles, and
/// channels are composited in this order within a layer.
pub const BRUSH_SIZES: [u32; 5] = [8, 16, 32, 64, 128];

pub const DEFAULT_BRUSH_SIZE: u32 = 32;

/// The tile canvas: a stack of layers painted over a fixed pixel area.
///
/// Layers are keyed by number and composite bottom to top in ascending order.
/// The selection is either an existing layer or nothing at all; every
/// operation here keeps it that way.
#[derive(Debug, Clone)]
pub struct Grid {
    canvas_size: Vec2,
    cell_size: Vec2,
    layers: BTreeMap<LayerId, TileLayer>,
    selected: Option<LayerId>,
    brush_size: u32,
}

impl Grid {
    /// Creates a grid with a single empty layer, which starts out selected.
    pub fn new(canvas_size: Vec2, cell_size: Vec2) -> Self {
        let mut layers = BTreeMap::new();
        layers.insert(LayerId::FIRST, TileLayer::new());
        Self {
            canvas_size,
            cell_size,
            layers,
            selected: Some(LayerId::FIRST),
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Changes the overlay cell size. Painted tiles are unaffected.
    pub fn set_cell_size(&mut self, cell_size: Vec2) {
        self.cell_size = cell_size;
    }

    pub fn num_rows(&self) -> u32 {
        cells_along(self.canvas_size.y, self.cell_size.y)
    }

    pub fn num_cols(&self) -> u32 {
        cells_along(self.canvas_size.x, self.cell_size.x)
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, brush_size: u32) -> GridResult<()> {
        if !BRUSH_SIZES.contains(&brush_size) {
            return Err(GridError::InvalidBrushSize(brush_size));
        }
        self.brush_size = brush_size;
        Ok(())
    }

    /// Rows and columns of the tile grid a brush size paints into.
    pub fn channel_dimensions(&self, brush_size: u32) -> (u32, u32) {
        let size = brush_size as f32;
        (
            cells_along(self.canvas_size.y, size),
            cells_along(self.canvas_size.x, size),
        )
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer numbers in ascending (bottom to top) order.
    pub fn layer_numbers(&self) -> Vec<LayerId> {
        self.layers.keys().copied().collect()
    }

    /// Layers in ascending (bottom to top) order.
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &TileLayer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    pub fn layer(&self, id: LayerId) -> Option<&TileLayer> {
        self.layers.get(&id)
    }

    pub fn selected_layer(&self) -> Option<LayerId> {
        self.selected
    }

    /// The selection as a plain number, with 0 meaning nothing is selected.
    pub fn selected_number(&self) -> u32 {
        self.selected.map_or(0, |id| id.number())
    }

    /// Writes `color` into the selected layer at the current brush size.
    ///
    /// Silently does nothing when no layer is selected or the cell lies
    /// outside the brush channel's grid.
    pub fn paint_cell(&mut self, row: u32, col: u32, color: Color) {
        let Some(id) = self.selected else {
            log::trace!("paint at ({row}, {col}) ignored: no layer selected");
            return;
        };
        let brush_size = self.brush_size;
        let (rows, cols) = self.channel_dimensions(brush_size);
        if row >= rows || col >= cols {
            log::trace!("paint at ({row}, {col}) ignored: outside {rows}x{cols} grid");
            return;
        }
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.set_tile(brush_size, row, col, color);
        }
    }

    /// Resets a cell of the selected layer to transparent.
    pub fn erase_cell(&mut self, row: u32, col: u32) {
        self.paint_cell(row, col, Color::TRANSPARENT);
    }

    /// Adds an empty layer under the smallest unused number and selects it.
    pub fn add_layer(&mut self) -> LayerId {
        let id = (1..)
            .map(LayerId::new)
            .find(|id| !self.layers.contains_key(id))
            .unwrap_or(LayerId::FIRST);
        self.layers.insert(id, TileLayer::new());
        self.selected = Some(id);
        log::info!("Added layer {id}");
        id
    }

    /// Removes the selected layer and returns its number.
    ///
    /// The selection moves to the next higher layer if there is one, otherwise
    /// to the next lower one, otherwise to nothing.
    pub fn delete_layer(&mut self) -> GridResult<LayerId> {
        let id = self.selected.ok_or(GridError::NoLayerSelected)?;
        if self.layers.remove(&id).is_none() {
            self.selected = None;
            return Err(GridError::UnknownLayer(id));
        }

        self.selected = self
            .layers
            .range(id..)
            .next()
            .or_else(|| self.layers.range(..id).next_back())
            .map(|(next, _)| *next);

        match self.selected {
            Some(next) => log::info!("Deleted layer {id}, selected layer {next}"),
            None => log::info!("Deleted layer {id}, no layers left"),
        }
        Ok(id)
    }

    /// Selects an existing layer. Unknown numbers leave the selection unchanged.
    pub fn select_layer(&mut self, id: LayerId) -> GridResult<()> {
        if !self.layers.contains_key(&id) {
            return Err(GridError::UnknownLayer(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Flips a layer's visibility and returns the new value.
    pub fn toggle_visibility(&mut self, id: LayerId) -> GridResult<bool> {
        let layer = self.layers.get_mut(&id).ok_or(GridError::UnknownLayer(id))?;
        let visible = !layer.visibility();
        layer.set_visibility(visible);
        log::debug!("Layer {id} visible: {visible}");
        Ok(visible)
    }

    /// Maps a canvas-local pixel position to the `(row, col)` it falls in
    /// under the current brush size.
    pub fn cell_at(&self, pos: Pos2) -> Option<(u32, u32)> {
        if pos.x < 0.0 || pos.y < 0.0 || pos.x >= self.canvas_size.x || pos.y >= self.canvas_size.y {
            return None;
        }
        let size = self.brush_size as f32;
        let (rows, cols) = self.channel_dimensions(self.brush_size);
        let row = (pos.y / size) as u32;
        let col = (pos.x / size) as u32;
        (row < rows && col < cols).then_some((row, col))
    }

    /// Pixel rectangle of a cell under the current brush size.
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        tile_rect(self.brush_size, row, col)
    }

    /// Projects the visible layers into draw commands, bottom layer first.
    ///
    /// Within a layer each painted brush channel is emitted as a full grid of
    /// rectangles, unpainted cells included as transparent. Channels a layer
    /// never painted emit nothing. The overlay lines, if enabled, come last.
    pub fn render(&self, overlay: &GridOverlay) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        for layer in self.layers.values().filter(|layer| layer.visibility()) {
            for brush_size in BRUSH_SIZES {
                if !layer.has_channel(brush_size) {
                    continue;
                }
                let (rows, cols) = self.channel_dimensions(brush_size);
                for row in 0..rows {
                    for col in 0..cols {
                        commands.push(DrawCommand::FilledRect {
                            rect: tile_rect(brush_size, row, col),
                            color: layer.get_tile(brush_size, row, col),
                        });
                    }
                }
            }
        }

        if overlay.visible {
            self.push_grid_lines(overlay.thickness, &mut commands);
        }
        commands
    }

    /// One line along the top and left edges, then one along the last pixel
    /// of every row and column.
    fn push_grid_lines(&self, thickness: f32, commands: &mut Vec<DrawCommand>) {
        let rows = self.num_rows();
        let cols = self.num_cols();
        if rows == 0 || cols == 0 {
            return;
        }
        let width = self.canvas_size.x;
        let height = self.canvas_size.y;
        let line = |from: Pos2, to: Pos2| DrawCommand::Line {
            from,
            to,
            color: GRID_LINE_COLOR,
            thickness,
        };

        commands.push(line(pos2(0.0, 0.0), pos2(width, 0.0)));
        for row in 1..=rows {
            let y = row as f32 * self.cell_size.y - 1.0;
            commands.push(line(pos2(0.0, y), pos2(width, y)));
        }

        commands.push(line(pos2(0.0, 0.0), pos2(0.0, height)));
        for col in 1..=cols {
            let x = col as f32 * self.cell_size.x - 1.0;
            commands.push(line(pos2(x, 0.0), pos2(x, height)));
        }
    }
}

fn cells_along(extent: f32, cell: f32) -> u32 {
    if cell <= 0.0 || extent <= 0.0 {
        0
    } else {
        (extent / cell).floor() as u32
    }
}

fn tile_rect(brush_size: u32, row: u32, col: u32) -> Rect {
    let size = brush_size as f32;
    Rect::from_min_size(pos2(col as f32 * size, row as f32 * size), vec2(size, size))
}
