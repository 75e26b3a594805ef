use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

use crate::domain::{
    GenerationDiff, Grid, HeatMap, PatternName, Result, RulePreset, Tool, edit,
};

use super::config::SimulationConfig;

/// Session orchestrates the simulation.
/// It is the only holder of mutable state: each step or edit replaces the
/// current grid and heat map with the fresh values returned by the domain.
pub struct Session {
    pub grid: Grid,
    pub heat: HeatMap,
    pub config: SimulationConfig,
    pub is_running: bool,
    pub generation: u64,
    pub last_diff: GenerationDiff,
    pub update_timer: f32,
    pub last_evolution_time_ms: f32,
}

impl Session {
    /// Create new session with an empty grid of the given dimensions
    pub fn new(cols: usize, rows: usize, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(cols, rows);
        let heat = HeatMap::cold(&grid, config.max_heat)?;
        Ok(Self {
            grid,
            heat,
            config,
            is_running: false,
            generation: 0,
            last_diff: GenerationDiff::default(),
            update_timer: 0.0,
            last_evolution_time_ms: 0.0,
        })
    }

    fn reset_with(&mut self, grid: Grid) -> Result<()> {
        self.heat = HeatMap::from_grid(&grid, self.config.max_heat)?;
        self.last_diff = GenerationDiff {
            population: crate::domain::count_live_cells(&grid),
            unchanged: grid.len(),
            ..GenerationDiff::default()
        };
        self.grid = grid;
        self.generation = 0;
        self.is_running = false;
        Ok(())
    }

    /// Clear grid and reset generation counter
    pub fn clear(&mut self) -> Result<()> {
        let (cols, rows) = self.grid.dimensions();
        debug!(cols, rows, "clearing grid");
        self.reset_with(Grid::new(cols, rows))
    }

    /// Randomize grid and reset generation counter
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let (cols, rows) = self.grid.dimensions();
        let grid = Grid::random(cols, rows, self.config.density, rng)?;
        debug!(cols, rows, density = self.config.density, "randomized grid");
        self.reset_with(grid)
    }

    /// Replace the grid with an empty one of new dimensions
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<()> {
        debug!(cols, rows, "resizing grid");
        self.reset_with(Grid::new(cols, rows))
    }

    pub fn set_rule(&mut self, rule: RulePreset) {
        debug!(rule = %rule, "rule changed");
        self.config.rule = rule;
    }

    pub fn set_wrap_edges(&mut self, wrap_edges: bool) {
        debug!(wrap_edges, "edge policy changed");
        self.config.wrap_edges = wrap_edges;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.config.tool = tool;
    }

    pub fn set_pattern(&mut self, pattern: PatternName) {
        self.config.pattern = pattern;
    }

    pub fn set_brush_size(&mut self, size: u32) -> Result<()> {
        edit::brush_radius(size)?;
        self.config.brush_size = size;
        Ok(())
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.config = self
            .config
            .with_speed(self.config.updates_per_second + delta);
    }

    /// Advance one generation: rule engine, then heat, then diff.
    pub fn step(&mut self) -> Result<GenerationDiff> {
        let start = Instant::now();
        let next = self
            .config
            .algorithm
            .step(&self.grid, self.config.step_options());
        let heat = self
            .heat
            .update(&next, self.config.decay, self.config.max_heat)?;
        let diff = GenerationDiff::between(&self.grid, &next)?;
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        self.grid = next;
        self.heat = heat;
        self.generation += 1;
        self.last_diff = diff;
        trace!(
            generation = self.generation,
            births = diff.births,
            deaths = diff.deaths,
            population = diff.population,
            "stepped"
        );
        Ok(diff)
    }

    /// Update simulation by one frame
    /// Steps at most once per call, at `updates_per_second` cadence
    pub fn tick(&mut self, delta_time: f32) -> Result<Option<GenerationDiff>> {
        if !self.is_running {
            return Ok(None);
        }

        self.update_timer += delta_time;
        if self.update_timer < self.config.update_interval() {
            return Ok(None);
        }
        self.update_timer = 0.0;
        self.step().map(Some)
    }

    /// Apply the selected tool at a grid cell.
    /// Heat is left as is; painted cells warm up on the next step.
    pub fn apply_tool(&mut self, x: isize, y: isize) -> Result<()> {
        self.grid = edit::paint(&self.grid, x, y, &self.config.edit_options())?;
        Ok(())
    }
}
