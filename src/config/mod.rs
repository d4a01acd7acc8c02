//! Scenario configuration: named avoidance presets and the optional
//! `shiftmap.toml` scenario file.

pub mod file;
pub mod presets;

pub use file::{load_scenario, parse_scenario, ScenarioFile, CONFIG_FILE_NAME};
pub use presets::AvoidancePreset;
