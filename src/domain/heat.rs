//! Decaying occupancy trail used by renderers. Has no effect on the rules.

use super::{Grid, LifeError, Result, index_of};

/// Default ceiling for heat values.
pub const DEFAULT_MAX_HEAT: f32 = 10.0;

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LifeError::InvalidHeatParameter { name, value })
    }
}

/// Per-cell heat in `[0, max_heat]`, parallel to a [`Grid`].
#[derive(Clone, Debug, PartialEq)]
pub struct HeatMap {
    cols: usize,
    rows: usize,
    max_heat: f32,
    values: Vec<f32>,
}

impl HeatMap {
    /// All-cold map matching `grid`.
    pub fn cold(grid: &Grid, max_heat: f32) -> Result<Self> {
        check_positive("max_heat", max_heat)?;
        Ok(Self {
            cols: grid.cols(),
            rows: grid.rows(),
            max_heat,
            values: vec![0.0; grid.len()],
        })
    }

    /// Live cells start at `max_heat`, dead cells at 0. Used after a reset.
    pub fn from_grid(grid: &Grid, max_heat: f32) -> Result<Self> {
        check_positive("max_heat", max_heat)?;
        let values = grid
            .cells()
            .iter()
            .map(|&c| if c != 0 { max_heat } else { 0.0 })
            .collect();
        Ok(Self {
            cols: grid.cols(),
            rows: grid.rows(),
            max_heat,
            values,
        })
    }

    /// Next heat map: live cells reset to `max_heat`, every other cell
    /// loses `decay` and floors at 0.
    ///
    /// A cell dead for `ceil(max_heat / decay)` generations reaches 0 and
    /// stays there.
    pub fn update(&self, current: &Grid, decay: f32, max_heat: f32) -> Result<Self> {
        check_positive("decay", decay)?;
        check_positive("max_heat", max_heat)?;
        if current.dimensions() != self.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                got: current.dimensions(),
            });
        }
        let values = self
            .values
            .iter()
            .zip(current.cells())
            .map(|(&previous, &cell)| {
                if cell != 0 {
                    max_heat
                } else {
                    (previous - decay).clamp(0.0, max_heat)
                }
            })
            .collect();
        Ok(Self {
            cols: self.cols,
            rows: self.rows,
            max_heat,
            values,
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Heat at (x, y); 0 outside the map
    pub fn get(&self, x: usize, y: usize) -> f32 {
        if x < self.cols && y < self.rows {
            self.values[index_of(x, y, self.cols)]
        } else {
            0.0
        }
    }

    /// Heat scaled into `[0, 1]` for color ramps
    pub fn normalized(&self, x: usize, y: usize) -> f32 {
        self.get(x, y) / self.max_heat
    }
}

/// Free-function form of [`HeatMap::from_grid`].
pub fn create_heat_from_grid(grid: &Grid, max_heat: f32) -> Result<HeatMap> {
    HeatMap::from_grid(grid, max_heat)
}

/// Free-function form of [`HeatMap::update`].
pub fn update_heat_map(
    previous: &HeatMap,
    current: &Grid,
    decay: f32,
    max_heat: f32,
) -> Result<HeatMap> {
    previous.update(current, decay, max_heat)
}
