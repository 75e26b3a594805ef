// Domain layer - automaton core: grid, rules, edits, heat, diffs
pub mod domain;

// Application layer - session driver and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    Algorithm, EdgePolicy, GenerationDiff, Grid, HeatMap, LifeError, PatternName, RulePreset,
    StepOptions, Tool,
};
pub use application::{Session, SimulationConfig};
