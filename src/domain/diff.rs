use super::{Grid, Result};

/// Summary of one generation's transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct GenerationDiff {
    /// Cells that went 0 -> 1
    pub births: usize,
    /// Cells that went 1 -> 0
    pub deaths: usize,
    /// Cells equal in both snapshots
    pub unchanged: usize,
    /// Live cells in the newer snapshot
    pub population: usize,
}

impl GenerationDiff {
    pub fn between(previous: &Grid, current: &Grid) -> Result<Self> {
        let (births, deaths) = count_births_and_deaths(previous, current)?;
        Ok(Self {
            births,
            deaths,
            unchanged: current.len() - births - deaths,
            population: count_live_cells(current),
        })
    }
}

/// Count 0 -> 1 (births) and 1 -> 0 (deaths) transitions between two
/// snapshots of the same shape.
pub fn count_births_and_deaths(previous: &Grid, current: &Grid) -> Result<(usize, usize)> {
    previous.ensure_same_dimensions(current.dimensions())?;
    Ok(previous
        .cells()
        .iter()
        .zip(current.cells())
        .fold((0, 0), |(births, deaths), (&before, &after)| match (before, after) {
            (0, 1) => (births + 1, deaths),
            (1, 0) => (births, deaths + 1),
            _ => (births, deaths),
        }))
}

/// Count total alive cells
pub fn count_live_cells(grid: &Grid) -> usize {
    grid.cells().iter().map(|&c| c as usize).sum()
}
