mod cell;
mod edges;
mod error;
mod grid;
mod rules;
mod patterns;
pub mod algorithm;
pub mod diff;
pub mod edit;
pub mod heat;
pub mod neighbors;

pub use cell::Cell;
pub use edges::EdgePolicy;
pub use error::{LifeError, Result};
pub use grid::{DEFAULT_DENSITY, Grid, index_of};
pub use rules::{RulePreset, RuleTable};
pub use patterns::PatternName;
pub use algorithm::{Algorithm, StepOptions, step, step_into, step_parallel};
pub use diff::{GenerationDiff, count_births_and_deaths, count_live_cells};
pub use edit::{EditOptions, Tool, apply_brush, paint, stamp_pattern, stamp_pattern_centered};
pub use heat::{DEFAULT_MAX_HEAT, HeatMap, create_heat_from_grid, update_heat_map};
pub use neighbors::count_live_neighbors;
