use egui::{ComboBox, Slider};

use crate::app::TileEditorApp;
use crate::grid::BRUSH_SIZES;
use crate::settings::{CELL_SIZES, GRID_THICKNESS_RANGE};

/// The "Edit Panel" window: color picker, grid options and pen size.
pub fn edit_panel(app: &mut TileEditorApp, ctx: &egui::Context) {
    egui::Window::new("Edit Panel")
        .default_pos(egui::pos2(20.0, 20.0))
        .show(ctx, |ui| {
            ui.heading("Color Palette");
            ui.horizontal(|ui| {
                ui.label("Selected Color:");
                ui.color_edit_button_rgba_unmultiplied(app.settings.selected_color.as_array_mut());
            });

            ui.separator();

            ui.checkbox(&mut app.settings.show_grid, "Show Grid");

            ComboBox::from_label("Cell Size")
                .selected_text(format!("{} px", app.settings.cell_size))
                .show_ui(ui, |ui| {
                    for size in CELL_SIZES {
                        ui.selectable_value(&mut app.settings.cell_size, size, format!("{size} px"));
                    }
                });

            ui.add(Slider::new(&mut app.settings.grid_thickness, GRID_THICKNESS_RANGE).text("Grid Thickness"));

            ComboBox::from_label("Pen Size")
                .selected_text(format!("{} px", app.settings.brush_size))
                .show_ui(ui, |ui| {
                    for size in BRUSH_SIZES {
                        ui.selectable_value(&mut app.settings.brush_size, size, format!("{size} px"));
                    }
                });

            ui.separator();

            match app.grid.selected_layer() {
                Some(id) => ui.label(format!("Painting on layer {id}")),
                None => ui.label("No layer selected"),
            };
            match app.hovered {
                Some((row, col)) => ui.label(format!("Cell: row {row}, col {col}")),
                None => ui.label("Cell: -"),
            };
        });
}
