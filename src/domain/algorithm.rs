//! Generational transition.
//!
//! Every cell of the next generation is computed from the same input
//! snapshot, so neighbor counts never observe a cell already updated in the
//! current step. The input grid is never modified.

use rayon::prelude::*;

use super::neighbors::count_live_neighbors;
use super::{Cell, EdgePolicy, Grid, Result, RulePreset, index_of};

/// Parameters of one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepOptions {
    pub rule: RulePreset,
    pub edges: EdgePolicy,
}

impl StepOptions {
    pub const fn new(rule: RulePreset, wrap_edges: bool) -> Self {
        Self {
            rule,
            edges: EdgePolicy::from_wrap(wrap_edges),
        }
    }
}

#[inline]
fn next_state(grid: &Grid, x: usize, y: usize, options: StepOptions) -> u8 {
    let current = Cell::from_byte(grid.cells()[index_of(x, y, grid.cols())]);
    let neighbors = count_live_neighbors(grid, x, y, options.edges);
    options.rule.table().evolve(current, neighbors).as_byte()
}

/// Pure functional evolution - returns new grid (serial)
pub fn step(grid: &Grid, options: StepOptions) -> Grid {
    let (cols, rows) = grid.dimensions();
    let cells = (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .map(|(x, y)| next_state(grid, x, y, options))
        .collect();
    Grid::from_raw(cols, rows, cells)
}

/// Write the next generation into `out`, reusing its allocation.
///
/// `out` must have the same dimensions as `grid`; `grid` is only read.
pub fn step_into(grid: &Grid, options: StepOptions, out: &mut Grid) -> Result<()> {
    grid.ensure_same_dimensions(out.dimensions())?;
    let cols = grid.cols();
    if cols == 0 {
        return Ok(());
    }
    for (y, row) in out.cells_mut().chunks_mut(cols).enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = next_state(grid, x, y, options);
        }
    }
    Ok(())
}

/// Parallel evolution using rayon, one task per row.
/// Produces output bit-identical to [`step`].
pub fn step_parallel(grid: &Grid, options: StepOptions) -> Grid {
    let (cols, rows) = grid.dimensions();
    let mut cells = vec![Cell::Dead.as_byte(); cols * rows];
    if cols > 0 {
        cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = next_state(grid, x, y, options);
                }
            });
    }
    Grid::from_raw(cols, rows, cells)
}

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    Serial,
    /// Rows split across the rayon pool
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub const fn all() -> [Algorithm; 2] {
        [Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Dispatch one generation to the selected implementation
    pub fn step(&self, grid: &Grid, options: StepOptions) -> Grid {
        match self {
            Algorithm::Serial => step(grid, options),
            Algorithm::Parallel => step_parallel(grid, options),
        }
    }
}
