use egui::{Pos2, Rect};

use crate::color::Color;
use crate::grid::Grid;

/// What a held mouse button does to the cell under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintAction {
    /// Left button: paint with the selected color
    Paint,
    /// Right button: reset to transparent
    Erase,
}

impl PaintAction {
    /// Resolves held buttons to an action. The primary button wins when both are held.
    pub fn from_buttons(primary_down: bool, secondary_down: bool) -> Option<Self> {
        if primary_down {
            Some(Self::Paint)
        } else if secondary_down {
            Some(Self::Erase)
        } else {
            None
        }
    }
}

/// Pointer state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub position: Option<Pos2>,
    pub primary_down: bool,
    pub secondary_down: bool,
}

impl PointerSnapshot {
    pub fn from_context(ctx: &egui::Context) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            primary_down: input.pointer.primary_down(),
            secondary_down: input.pointer.secondary_down(),
        })
    }
}

/// The result of routing one frame of pointer input to the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasInput {
    /// Brush cell under the pointer, if the pointer is over the canvas
    pub hovered: Option<(u32, u32)>,
    pub action: Option<PaintAction>,
}

impl CanvasInput {
    /// Applies the action, if any, to the hovered cell. Returns true if the grid was written.
    pub fn apply(&self, grid: &mut Grid, color: Color) -> bool {
        let (Some((row, col)), Some(action)) = (self.hovered, self.action) else {
            return false;
        };
        match action {
            PaintAction::Paint => grid.paint_cell(row, col, color),
            PaintAction::Erase => grid.erase_cell(row, col),
        }
        true
    }
}

/// Converts raw pointer state into cell-addressed canvas input
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { canvas_rect: None }
    }

    /// Update the screen rectangle the canvas was laid out in this frame
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Routes a pointer snapshot to the grid.
    ///
    /// Nothing is hovered until the canvas has been laid out, or while the
    /// pointer is outside it.
    pub fn route(&self, pointer: &PointerSnapshot, grid: &Grid) -> CanvasInput {
        let hovered = match (self.canvas_rect, pointer.position) {
            (Some(rect), Some(pos)) if rect.contains(pos) => grid.cell_at(pos - rect.min.to_vec2()),
            _ => None,
        };
        let action = hovered.and(PaintAction::from_buttons(pointer.primary_down, pointer.secondary_down));
        CanvasInput { hovered, action }
    }
}
