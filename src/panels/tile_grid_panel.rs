use egui::{Button, Color32, Sense};
use uuid::Uuid;

use crate::app::TileEditorApp;
use crate::input::{CanvasInput, PointerSnapshot};
use crate::layer::LayerId;

/// Matches the clear color behind the editor windows
const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(18, 33, 43);

/// The "Tile Grid" window: the paintable canvas with the layer list beside it.
pub fn tile_grid_panel(app: &mut TileEditorApp, ctx: &egui::Context) {
    egui::Window::new("Tile Grid")
        .movable(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                canvas(app, ui);
                ui.separator();
                ui.vertical(|ui| layers_list(app, ui));
            });
        });
}

fn canvas(app: &mut TileEditorApp, ui: &mut egui::Ui) {
    let (response, painter) = ui.allocate_painter(app.grid.canvas_size(), Sense::click_and_drag());
    let origin = response.rect.min;
    app.input.set_canvas_rect(response.rect);

    let canvas_input = if response.contains_pointer() {
        app.input.route(&PointerSnapshot::from_context(ui.ctx()), &app.grid)
    } else {
        CanvasInput::default()
    };
    if canvas_input.apply(&mut app.grid, app.settings.selected_color) {
        log::trace!("{:?} at {:?}", canvas_input.action, canvas_input.hovered);
    }
    app.hovered = canvas_input.hovered;

    painter.rect_filled(response.rect, 0.0, CANVAS_BACKGROUND);
    let commands = app.grid.render(&app.settings.overlay());
    app.renderer.paint(&painter, origin, &commands);

    if let Some((row, col)) = canvas_input.hovered {
        app.renderer.paint_highlight(&painter, origin, app.grid.cell_rect(row, col));
    }
}

fn layers_list(app: &mut TileEditorApp, ui: &mut egui::Ui) {
    ui.heading("Layers");

    ui.horizontal(|ui| {
        if ui.button("Add Layer").clicked() {
            app.grid.add_layer();
        }
        let can_delete = app.grid.selected_layer().is_some();
        if ui.add_enabled(can_delete, Button::new("Delete Layer")).clicked() {
            if let Err(err) = app.grid.delete_layer() {
                log::warn!("Delete layer failed: {err}");
            }
        }
    });
    ui.separator();

    // Collect first so the grid can be mutated from the rows
    let rows: Vec<(LayerId, Uuid, bool)> = app
        .grid
        .layers()
        .map(|(id, layer)| (id, layer.uid(), layer.visibility()))
        .collect();
    let selected = app.grid.selected_layer();

    if rows.is_empty() {
        ui.label("No layers");
        return;
    }

    for (id, uid, visible) in rows {
        ui.push_id(uid, |ui| {
            ui.horizontal(|ui| {
                let mut shown = visible;
                if ui.checkbox(&mut shown, "").on_hover_text("Visible").changed() {
                    if let Err(err) = app.grid.toggle_visibility(id) {
                        log::warn!("Toggle visibility failed: {err}");
                    }
                }
                if ui.selectable_label(selected == Some(id), format!("Layer {id}")).clicked() {
                    if let Err(err) = app.grid.select_layer(id) {
                        log::warn!("Select layer failed: {err}");
                    }
                }
            });
        });
    }
}
