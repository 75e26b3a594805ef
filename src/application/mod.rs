mod config;
mod session;

pub use config::{MAX_SPEED, MIN_SPEED, SimulationConfig};
pub use session::Session;
