use egui::{Rect, pos2, vec2};
use tile_editor::{Color, DrawCommand, Grid, GridOverlay, LayerId};

fn create_test_grid() -> Grid {
    Grid::new(vec2(64.0, 64.0), vec2(32.0, 32.0))
}

fn filled_rects(commands: &[DrawCommand]) -> Vec<(Rect, Color)> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FilledRect { rect, color } => Some((*rect, *color)),
            DrawCommand::Line { .. } => None,
        })
        .collect()
}

#[test]
fn test_single_painted_cell() {
    let mut grid = create_test_grid();
    assert_eq!(grid.num_rows(), 2);
    assert_eq!(grid.num_cols(), 2);

    grid.paint_cell(0, 0, Color::RED);
    let rects = filled_rects(&grid.render(&GridOverlay::hidden()));

    assert_eq!(
        rects,
        vec![
            (Rect::from_min_size(pos2(0.0, 0.0), vec2(32.0, 32.0)), Color::RED),
            (Rect::from_min_size(pos2(32.0, 0.0), vec2(32.0, 32.0)), Color::TRANSPARENT),
            (Rect::from_min_size(pos2(0.0, 32.0), vec2(32.0, 32.0)), Color::TRANSPARENT),
            (Rect::from_min_size(pos2(32.0, 32.0), vec2(32.0, 32.0)), Color::TRANSPARENT),
        ]
    );
}

#[test]
fn test_empty_grid_renders_nothing_but_lines() {
    let grid = create_test_grid();
    let commands = grid.render(&GridOverlay::default());
    assert!(!commands.is_empty());
    assert!(commands.iter().all(DrawCommand::is_line));
}

#[test]
fn test_hidden_layer_is_skipped_but_kept() {
    let mut grid = create_test_grid();
    grid.paint_cell(1, 1, Color::BLUE);
    grid.toggle_visibility(LayerId::FIRST).unwrap();

    assert!(filled_rects(&grid.render(&GridOverlay::hidden())).is_empty());
    assert_eq!(grid.layer(LayerId::FIRST).unwrap().get_tile(32, 1, 1), Color::BLUE);

    grid.toggle_visibility(LayerId::FIRST).unwrap();
    let rects = filled_rects(&grid.render(&GridOverlay::hidden()));
    assert_eq!(rects.len(), 4);
    assert_eq!(rects[3].1, Color::BLUE);
}

#[test]
fn test_layers_render_bottom_to_top() {
    let mut grid = create_test_grid();
    grid.paint_cell(0, 0, Color::RED);
    grid.add_layer();
    grid.paint_cell(0, 0, Color::GREEN);

    let rects = filled_rects(&grid.render(&GridOverlay::hidden()));
    assert_eq!(rects.len(), 8);
    assert_eq!(rects[0].1, Color::RED);
    assert_eq!(rects[4].1, Color::GREEN);
}

#[test]
fn test_brush_channels_render_smallest_first() {
    let mut grid = create_test_grid();
    grid.set_brush_size(64).unwrap();
    grid.paint_cell(0, 0, Color::BLUE);
    grid.set_brush_size(16).unwrap();
    grid.paint_cell(3, 3, Color::RED);

    let rects = filled_rects(&grid.render(&GridOverlay::hidden()));
    // 4x4 cells of 16px, then the single 64px cell
    assert_eq!(rects.len(), 17);
    assert_eq!(rects[15], (Rect::from_min_size(pos2(48.0, 48.0), vec2(16.0, 16.0)), Color::RED));
    assert_eq!(rects[16], (Rect::from_min_size(pos2(0.0, 0.0), vec2(64.0, 64.0)), Color::BLUE));
}

#[test]
fn test_overlay_lines_follow_cell_size() {
    let mut grid = create_test_grid();
    grid.set_cell_size(vec2(16.0, 16.0));
    let overlay = GridOverlay { visible: true, thickness: 3.0 };
    let commands = grid.render(&overlay);

    // 4 rows + top edge, 4 columns + left edge
    assert_eq!(commands.len(), 10);
    for command in &commands {
        match command {
            DrawCommand::Line { thickness, color, .. } => {
                assert_eq!(*thickness, 3.0);
                assert_eq!(*color, egui::Color32::from_rgb(150, 150, 150));
            }
            DrawCommand::FilledRect { .. } => panic!("no tiles were painted"),
        }
    }
}

#[test]
fn test_render_does_not_mutate() {
    let mut grid = create_test_grid();
    grid.paint_cell(0, 1, Color::WHITE);
    let first = grid.render(&GridOverlay::default());
    let second = grid.render(&GridOverlay::default());
    assert_eq!(first, second);
}
