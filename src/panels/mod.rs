mod edit_panel;
mod tile_grid_panel;

pub use edit_panel::edit_panel;
pub use tile_grid_panel::tile_grid_panel;
