//! Interactive edits: square brush strokes and pattern stamps.
//!
//! Both return a modified copy and leave the input grid untouched. Under the
//! bounded edge policy cells that fall off the grid are skipped one by one;
//! the rest of the stroke or stamp still lands.

use std::fmt;
use std::str::FromStr;

use super::{Cell, EdgePolicy, Grid, LifeError, PatternName, Result, index_of};

/// Brush radius for a given size: 1 paints one cell, 3 a 3x3 square.
/// Even sizes round down to the next lower odd size.
pub fn brush_radius(size: u32) -> Result<isize> {
    if size == 0 {
        return Err(LifeError::InvalidBrushSize(size));
    }
    Ok(((size - 1) / 2) as isize)
}

/// Set a square centered at (x, y) to `alive`.
pub fn apply_brush(
    grid: &Grid,
    x: isize,
    y: isize,
    size: u32,
    alive: bool,
    edges: EdgePolicy,
) -> Result<Grid> {
    let radius = brush_radius(size)?;
    let (cols, rows) = grid.dimensions();
    let value = Cell::from_alive(alive).as_byte();
    let xs = edges.span(x, radius, cols);
    let ys = edges.span(y, radius, rows);
    let mut next = grid.clone();
    let cells = next.cells_mut();
    for &ny in &ys {
        for &nx in &xs {
            cells[index_of(nx, ny, cols)] = value;
        }
    }
    Ok(next)
}

/// Force every offset of `pattern`, anchored at (cx, cy), alive.
///
/// The stamp is additive: cells outside the shape keep their state.
pub fn stamp_pattern(
    grid: &Grid,
    pattern: PatternName,
    cx: isize,
    cy: isize,
    edges: EdgePolicy,
) -> Grid {
    let (cols, rows) = grid.dimensions();
    let mut next = grid.clone();
    let cells = next.cells_mut();
    for &(dx, dy) in pattern.offsets() {
        if let (Some(nx), Some(ny)) = (edges.shift(cx, dx, cols), edges.shift(cy, dy, rows)) {
            cells[index_of(nx, ny, cols)] = Cell::Alive.as_byte();
        }
    }
    next
}

/// Stamp anchored at the grid center.
pub fn stamp_pattern_centered(grid: &Grid, pattern: PatternName, edges: EdgePolicy) -> Grid {
    let (cols, rows) = grid.dimensions();
    stamp_pattern(grid, pattern, (cols / 2) as isize, (rows / 2) as isize, edges)
}

/// Interactive tool selected in the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Tool {
    #[default]
    Draw,
    Erase,
    Stamp,
}

impl Tool {
    pub const fn all() -> [Tool; 3] {
        [Tool::Draw, Tool::Erase, Tool::Stamp]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Tool::Draw => "draw",
            Tool::Erase => "erase",
            Tool::Stamp => "stamp",
        }
    }
}

impl FromStr for Tool {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|tool| tool.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownTool(s.to_string()))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Everything a pointer edit needs besides the target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditOptions {
    pub tool: Tool,
    pub brush_size: u32,
    pub pattern: PatternName,
    pub edges: EdgePolicy,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            tool: Tool::Draw,
            brush_size: 1,
            pattern: PatternName::Glider,
            edges: EdgePolicy::Wrap,
        }
    }
}

/// Apply the selected tool at (x, y).
pub fn paint(grid: &Grid, x: isize, y: isize, options: &EditOptions) -> Result<Grid> {
    match options.tool {
        Tool::Draw => apply_brush(grid, x, y, options.brush_size, true, options.edges),
        Tool::Erase => apply_brush(grid, x, y, options.brush_size, false, options.edges),
        Tool::Stamp => Ok(stamp_pattern(grid, options.pattern, x, y, options.edges)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RulePreset, StepOptions, algorithm::step};
    use proptest::prelude::*;

    fn count(grid: &Grid) -> usize {
        grid.cells().iter().filter(|&&c| c == 1).count()
    }

    #[test]
    fn test_brush_radius() {
        assert_eq!(brush_radius(1), Ok(0));
        assert_eq!(brush_radius(3), Ok(1));
        assert_eq!(brush_radius(5), Ok(2));
        assert_eq!(brush_radius(4), Ok(1));
        assert_eq!(brush_radius(0), Err(LifeError::InvalidBrushSize(0)));
    }

    #[test]
    fn test_brush_sizes_paint_squares() {
        let grid = Grid::new(10, 10);
        assert_eq!(count(&apply_brush(&grid, 5, 5, 1, true, EdgePolicy::Bounded).unwrap()), 1);
        assert_eq!(count(&apply_brush(&grid, 5, 5, 3, true, EdgePolicy::Bounded).unwrap()), 9);
        assert_eq!(count(&apply_brush(&grid, 5, 5, 5, true, EdgePolicy::Bounded).unwrap()), 25);
    }

    #[test]
    fn test_brush_clips_per_cell_at_corner() {
        let grid = Grid::new(8, 8);
        let bounded = apply_brush(&grid, 0, 0, 3, true, EdgePolicy::Bounded).unwrap();
        assert_eq!(count(&bounded), 4);
        assert!(bounded.is_alive(0, 0) && bounded.is_alive(1, 1));

        let wrapped = apply_brush(&grid, 0, 0, 3, true, EdgePolicy::Wrap).unwrap();
        assert_eq!(count(&wrapped), 9);
        assert!(wrapped.is_alive(7, 7));
        assert!(wrapped.is_alive(7, 0));
        assert!(wrapped.is_alive(0, 7));
    }

    #[test]
    fn test_brush_fully_off_grid_is_a_no_op() {
        let grid = Grid::new(4, 4);
        let next = apply_brush(&grid, -5, 2, 3, true, EdgePolicy::Bounded).unwrap();
        assert_eq!(next, grid);
    }

    #[test]
    fn test_edits_at_isize_limits_do_not_overflow() {
        let grid = Grid::new(8, 8);
        let next = apply_brush(&grid, isize::MAX, 0, 3, true, EdgePolicy::Bounded).unwrap();
        assert_eq!(next, grid);
        let next = apply_brush(&grid, 0, isize::MIN, 3, true, EdgePolicy::Bounded).unwrap();
        assert_eq!(next, grid);

        let stamped = stamp_pattern(&grid, PatternName::Lwss, isize::MIN, 0, EdgePolicy::Bounded);
        assert_eq!(stamped, grid);
        let stamped = stamp_pattern(&grid, PatternName::Lwss, isize::MIN, 3, EdgePolicy::Wrap);
        assert_eq!(count(&stamped), 9);
        let brushed = apply_brush(&grid, isize::MAX, isize::MIN, 3, true, EdgePolicy::Wrap).unwrap();
        assert_eq!(count(&brushed), 9);
    }

    #[test]
    fn test_huge_brush_clips_to_grid() {
        let grid = Grid::new(6, 4);
        let bounded = apply_brush(&grid, 2, 2, u32::MAX, true, EdgePolicy::Bounded).unwrap();
        assert_eq!(count(&bounded), 24);
        let wrapped = apply_brush(&grid, 2, 2, u32::MAX, true, EdgePolicy::Wrap).unwrap();
        assert_eq!(count(&wrapped), 24);
    }

    #[test]
    fn test_erase_clears_square_and_leaves_input() {
        let full = Grid::from_cells(5, 5, vec![1; 25]).unwrap();
        let erased = apply_brush(&full, 2, 2, 3, false, EdgePolicy::Wrap).unwrap();
        assert_eq!(count(&erased), 16);
        assert!(!erased.is_alive(2, 2));
        assert_eq!(count(&full), 25);
    }

    #[test]
    fn test_stamp_is_additive() {
        let base = apply_brush(&Grid::new(10, 10), 0, 0, 1, true, EdgePolicy::Wrap).unwrap();
        let stamped = stamp_pattern(&base, PatternName::Glider, 5, 5, EdgePolicy::Wrap);
        assert!(stamped.is_alive(0, 0));
        assert_eq!(count(&stamped), 6);
        for &(dx, dy) in PatternName::Glider.offsets() {
            assert!(stamped.is_alive((5 + dx) as usize, (5 + dy) as usize));
        }
    }

    #[test]
    fn test_stamp_clips_or_wraps() {
        let grid = Grid::new(6, 6);
        let bounded = stamp_pattern(&grid, PatternName::Blinker, 0, 0, EdgePolicy::Bounded);
        assert_eq!(count(&bounded), 2);
        let wrapped = stamp_pattern(&grid, PatternName::Blinker, 0, 0, EdgePolicy::Wrap);
        assert_eq!(count(&wrapped), 3);
        assert!(wrapped.is_alive(5, 0));
    }

    #[test]
    fn test_blinker_returns_after_two_steps() {
        let grid = stamp_pattern_centered(&Grid::new(8, 8), PatternName::Blinker, EdgePolicy::Wrap);
        let options = StepOptions::new(RulePreset::Conway, true);
        let once = step(&grid, options);
        assert_ne!(once, grid);
        assert_eq!(step(&once, options), grid);
    }

    #[test]
    fn test_paint_dispatches_tool() {
        let grid = Grid::new(9, 9);
        let mut options = EditOptions { brush_size: 3, ..EditOptions::default() };
        let drawn = paint(&grid, 4, 4, &options).unwrap();
        assert_eq!(count(&drawn), 9);

        options.tool = Tool::Erase;
        options.brush_size = 1;
        let erased = paint(&drawn, 4, 4, &options).unwrap();
        assert_eq!(count(&erased), 8);

        options.tool = Tool::Stamp;
        options.pattern = PatternName::RPentomino;
        let stamped = paint(&grid, 4, 4, &options).unwrap();
        assert_eq!(count(&stamped), 5);
    }

    #[test]
    fn test_tool_parse() {
        assert_eq!("stamp".parse::<Tool>(), Ok(Tool::Stamp));
        assert_eq!("spray".parse::<Tool>(), Err(LifeError::UnknownTool("spray".into())));
    }

    proptest! {
        #[test]
        fn stamp_never_clears(
            cells in proptest::collection::vec(0u8..=1, 12 * 9),
            cx in -3isize..15,
            cy in -3isize..12,
            wrap in any::<bool>(),
            pick in 0usize..4,
        ) {
            let grid = Grid::from_cells(12, 9, cells).unwrap();
            let pattern = PatternName::all()[pick];
            let stamped = stamp_pattern(&grid, pattern, cx, cy, EdgePolicy::from_wrap(wrap));
            for (before, after) in grid.cells().iter().zip(stamped.cells()) {
                prop_assert!(*after >= *before);
            }
        }
    }
}
