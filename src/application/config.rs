use crate::domain::{
    Algorithm, DEFAULT_DENSITY, DEFAULT_MAX_HEAT, EdgePolicy, EditOptions, LifeError, PatternName,
    Result, RulePreset, StepOptions, Tool, edit::brush_radius,
};

/// Simulation speed bounds, in generations per second.
pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

/// Everything the control surface can select.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rule: RulePreset,
    pub wrap_edges: bool,
    pub tool: Tool,
    /// Odd positive sizes; even sizes round down
    pub brush_size: u32,
    pub pattern: PatternName,
    /// Heat lost per generation by a dead cell
    pub decay: f32,
    pub max_heat: f32,
    /// Live probability used by randomize
    pub density: f64,
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: RulePreset::Conway,
            wrap_edges: true,
            tool: Tool::Draw,
            brush_size: 1,
            pattern: PatternName::Glider,
            decay: 1.0,
            max_heat: DEFAULT_MAX_HEAT,
            density: DEFAULT_DENSITY,
            updates_per_second: 10.0,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject values the core would refuse later.
    pub fn validate(&self) -> Result<()> {
        brush_radius(self.brush_size)?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.updates_per_second) {
            return Err(LifeError::InvalidSpeed {
                value: self.updates_per_second,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        for (name, value) in [("decay", self.decay), ("max_heat", self.max_heat)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LifeError::InvalidHeatParameter { name, value });
            }
        }
        Ok(())
    }

    pub const fn edges(&self) -> EdgePolicy {
        EdgePolicy::from_wrap(self.wrap_edges)
    }

    pub const fn step_options(&self) -> StepOptions {
        StepOptions::new(self.rule, self.wrap_edges)
    }

    pub const fn edit_options(&self) -> EditOptions {
        EditOptions {
            tool: self.tool,
            brush_size: self.brush_size,
            pattern: self.pattern,
            edges: self.edges(),
        }
    }

    /// Speed clamped to the supported range; NaN falls back to the minimum
    pub fn with_speed(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = clamp_speed(updates_per_second);
        self
    }

    /// Seconds between generations, always finite and positive
    pub fn update_interval(&self) -> f32 {
        1.0 / clamp_speed(self.updates_per_second)
    }
}

fn clamp_speed(updates_per_second: f32) -> f32 {
    if updates_per_second.is_nan() {
        MIN_SPEED
    } else {
        updates_per_second.clamp(MIN_SPEED, MAX_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.rule, RulePreset::Conway);
        assert!(config.wrap_edges);
        assert_eq!(config.max_heat, 10.0);
        assert_eq!(config.density, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SimulationConfig::default();
        assert_eq!(
            SimulationConfig { brush_size: 0, ..base }.validate(),
            Err(LifeError::InvalidBrushSize(0))
        );
        assert_eq!(
            SimulationConfig { density: -0.1, ..base }.validate(),
            Err(LifeError::InvalidDensity(-0.1))
        );
        assert!(SimulationConfig { decay: 0.0, ..base }.validate().is_err());
        assert!(SimulationConfig { max_heat: f32::INFINITY, ..base }.validate().is_err());
    }

    #[test]
    fn test_derived_options() {
        let config = SimulationConfig {
            rule: RulePreset::Seeds,
            wrap_edges: false,
            tool: Tool::Stamp,
            pattern: PatternName::Lwss,
            ..SimulationConfig::default()
        };
        assert_eq!(config.step_options().rule, RulePreset::Seeds);
        assert_eq!(config.step_options().edges, EdgePolicy::Bounded);
        let edit = config.edit_options();
        assert_eq!(edit.tool, Tool::Stamp);
        assert_eq!(edit.pattern, PatternName::Lwss);
    }

    #[test]
    fn test_speed_is_clamped() {
        let config = SimulationConfig::default();
        assert_eq!(config.with_speed(100.0).updates_per_second, MAX_SPEED);
        assert_eq!(config.with_speed(0.0).updates_per_second, MIN_SPEED);
        assert_eq!(config.with_speed(f32::NAN).updates_per_second, MIN_SPEED);
    }

    #[test]
    fn test_validate_rejects_bad_speeds() {
        let base = SimulationConfig::default();
        for speed in [0.0, f32::NAN, 1000.0, f32::INFINITY] {
            let config = SimulationConfig { updates_per_second: speed, ..base };
            assert!(
                matches!(config.validate(), Err(LifeError::InvalidSpeed { .. })),
                "speed {speed} accepted"
            );
        }
        assert!(SimulationConfig { updates_per_second: 60.0, ..base }.validate().is_ok());
    }

    #[test]
    fn test_update_interval_is_always_finite() {
        let base = SimulationConfig::default();
        assert_eq!(base.update_interval(), 0.1);
        for speed in [0.0, f32::NAN, -5.0] {
            let config = SimulationConfig { updates_per_second: speed, ..base };
            assert_eq!(config.update_interval(), 1.0);
        }
        let fast = SimulationConfig { updates_per_second: 1000.0, ..base };
        assert_eq!(fast.update_interval(), 1.0 / 60.0);
    }
}
