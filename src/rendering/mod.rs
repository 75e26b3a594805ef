use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::{Grid, HeatMap};

/// Height reserved at the bottom of the window for the status lines.
pub const HUD_HEIGHT: f32 = 70.0;

/// Side of one cell in pixels so the whole grid fits the window
pub fn cell_size(grid: &Grid) -> f32 {
    let (cols, rows) = grid.dimensions();
    if cols == 0 || rows == 0 {
        return 0.0;
    }
    let w = screen_width() / cols as f32;
    let h = (screen_height() - HUD_HEIGHT).max(1.0) / rows as f32;
    w.min(h).max(1.0)
}

/// Convert screen coordinates to a grid cell. Clicks outside the drawn
/// grid, including the margin beside it and the HUD, map to nothing.
pub fn screen_to_cell(grid: &Grid, screen_x: f32, screen_y: f32) -> Option<(isize, isize)> {
    let (cols, rows) = grid.dimensions();
    cell_at(cols, rows, cell_size(grid), screen_x, screen_y)
}

/// Cell under a point for a grid drawn from the origin with square cells
/// of side `size`.
pub fn cell_at(
    cols: usize,
    rows: usize,
    size: f32,
    screen_x: f32,
    screen_y: f32,
) -> Option<(isize, isize)> {
    if !(size > 0.0 && screen_x >= 0.0 && screen_y >= 0.0) {
        return None;
    }
    let (x, y) = ((screen_x / size).floor(), (screen_y / size).floor());
    (x < cols as f32 && y < rows as f32).then_some((x as isize, y as isize))
}

/// Fade from background to ember red as heat drops
fn heat_color(intensity: f32) -> Color {
    let t = intensity.clamp(0.0, 1.0);
    Color::new(0.06 + 0.8 * t, 0.06 + 0.25 * t * t, 0.06, 1.0)
}

/// Draw live cells over the heat trail
pub fn draw_grid(grid: &Grid, heat: &HeatMap) {
    let size = cell_size(grid);
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let gap = if size >= 4.0 { 1.0 } else { 0.0 };

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = (x as f32 * size, y as f32 * size);
        let color = if cell.is_alive() {
            alive_color
        } else {
            let intensity = heat.normalized(x, y);
            if intensity <= 0.0 {
                continue;
            }
            heat_color(intensity)
        };
        draw_rectangle(sx, sy, size - gap, size - gap, color);
    }
}

/// Draw status and key help below the grid
pub fn draw_hud(session: &Session) {
    let top = screen_height() - HUD_HEIGHT;
    draw_rectangle(0.0, top, screen_width(), HUD_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    let config = &session.config;
    let diff = session.last_diff;
    let status = format!(
        "Gen {} | Pop {} | +{} -{} | {} ({}) | {} | {:.0} gen/s | {} {:.1}ms | {}",
        session.generation,
        diff.population,
        diff.births,
        diff.deaths,
        config.rule.name(),
        config.rule.table().notation(),
        if config.wrap_edges { "Wrap" } else { "Bounded" },
        config.updates_per_second,
        config.algorithm.name(),
        session.last_evolution_time_ms,
        if session.is_running { "Running" } else { "Paused" },
    );
    draw_text(&status, 10.0, top + 22.0, 20.0, WHITE);

    let tool = format!(
        "Tool: {} | Brush {} | Pattern {} - {}",
        config.tool,
        config.brush_size,
        config.pattern.name(),
        config.pattern.description(),
    );
    draw_text(&tool, 10.0, top + 42.0, 18.0, Color::from_rgba(180, 180, 180, 255));
    draw_text(
        "Space play  N step  C clear  R random  1-3 rule  W wrap  D/E/S tool  P pattern  [ ] brush  A algo",
        10.0,
        top + 62.0,
        16.0,
        GRAY,
    );
}
