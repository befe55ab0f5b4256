use crate::grid::Grid;
use crate::input::InputHandler;
use crate::panels::{edit_panel, tile_grid_panel};
use crate::renderer::Renderer;
use crate::settings::EditorSettings;

/// The tile editor application.
///
/// Only [`EditorSettings`] are persisted on shutdown; the painted grid lives
/// for the process lifetime.
#[derive(Debug)]
pub struct TileEditorApp {
    pub(crate) settings: EditorSettings,
    pub(crate) grid: Grid,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    /// Cell under the pointer during the last frame
    pub(crate) hovered: Option<(u32, u32)>,
}

impl Default for TileEditorApp {
    fn default() -> Self {
        Self::with_settings(EditorSettings::default())
    }
}

impl TileEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorSettings>(storage, eframe::APP_KEY))
            .map(EditorSettings::validated)
            .unwrap_or_default();
        log::info!("Starting tile editor with {settings:?}");
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let grid = settings.build_grid();
        Self {
            settings,
            grid,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            hovered: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Pushes the cell and brush sizes from the settings into the grid.
    pub(crate) fn sync_grid_settings(&mut self) {
        let cell = self.settings.cell_size as f32;
        if self.grid.cell_size() != egui::vec2(cell, cell) {
            self.grid.set_cell_size(egui::vec2(cell, cell));
        }
        if self.grid.brush_size() != self.settings.brush_size {
            if let Err(err) = self.grid.set_brush_size(self.settings.brush_size) {
                log::warn!("{err}");
                self.settings.brush_size = self.grid.brush_size();
            }
        }
    }
}

impl eframe::App for TileEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        edit_panel(self, ctx);
        self.sync_grid_settings();
        tile_grid_panel(self, ctx);

        // Keep painting while a button is held, even if the pointer is still
        if ctx.input(|i| i.pointer.any_down()) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_has_one_layer() {
        let app = TileEditorApp::default();
        assert_eq!(app.grid().layer_count(), 1);
        assert_eq!(app.settings(), &EditorSettings::default());
    }

    #[test]
    fn test_sync_grid_settings() {
        let mut app = TileEditorApp::default();
        app.settings.cell_size = 16;
        app.settings.brush_size = 8;
        app.sync_grid_settings();
        assert_eq!(app.grid().cell_size(), egui::vec2(16.0, 16.0));
        assert_eq!(app.grid().brush_size(), 8);

        app.settings.brush_size = 3;
        app.sync_grid_settings();
        assert_eq!(app.grid().brush_size(), 8);
        assert_eq!(app.settings.brush_size, 8);
    }
}
