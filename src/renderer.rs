// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::color::Color;

/// Color of the grid overlay lines.
pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(150, 150, 150);

/// A single primitive produced by [`crate::Grid::render`], in canvas-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FilledRect { rect: Rect, color: Color },
    Line { from: Pos2, to: Pos2, color: Color32, thickness: f32 },
}

impl DrawCommand {
    pub fn is_filled_rect(&self) -> bool {
        matches!(self, Self::FilledRect { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}

/// Whether and how to draw the cell grid on top of the tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOverlay {
    pub visible: bool,
    pub thickness: f32,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self {
            visible: true,
            thickness: 1.0,
        }
    }
}

impl GridOverlay {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }
}

/// Replays draw commands onto an egui painter.
#[derive(Debug)]
pub struct Renderer {
    /// Outline color for the cell under the pointer
    highlight_color: Option<Color32>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            highlight_color: Some(Color32::WHITE),
        }
    }

    pub fn set_highlight_color(&mut self, color: Option<Color32>) {
        self.highlight_color = color;
    }

    /// Paints `commands` with the canvas top-left corner at `origin`.
    ///
    /// Fully transparent rectangles are skipped; they would not change a pixel.
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2, commands: &[DrawCommand]) {
        let offset = origin.to_vec2();
        for command in commands {
            match command {
                DrawCommand::FilledRect { rect, color } => {
                    if color.is_transparent() {
                        continue;
                    }
                    painter.rect_filled(rect.translate(offset), 0.0, color.to_color32());
                }
                DrawCommand::Line { from, to, color, thickness } => {
                    painter.line_segment([*from + offset, *to + offset], Stroke::new(*thickness, *color));
                }
            }
        }
    }

    /// Outlines the hovered brush cell, given in canvas-local pixels.
    pub fn paint_highlight(&self, painter: &egui::Painter, origin: Pos2, cell: Rect) {
        if let Some(color) = self.highlight_color {
            painter.rect_stroke(cell.translate(origin.to_vec2()), 0.0, Stroke::new(1.0, color));
        }
    }
}
