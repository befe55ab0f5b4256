#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod error;
pub mod grid;
pub mod input;
pub mod layer;
pub mod panels;
pub mod renderer;
pub mod settings;

pub use app::TileEditorApp;
pub use color::Color;
pub use error::{GridError, GridResult};
pub use grid::{BRUSH_SIZES, Grid};
pub use input::{CanvasInput, InputHandler, PaintAction};
pub use layer::{LayerId, TileKey, TileLayer};
pub use renderer::{DrawCommand, GridOverlay, Renderer};
pub use settings::EditorSettings;
