//! Scenario-file schema and loading.
//!
//! A `shiftmap.toml` describes one scenario: project size, rate, phase
//! allocation, maturity levels, risk weights and the avoidance preset.
//! Discovery walks ancestor directories from the current directory; a
//! malformed file is reported as a warning and the defaults are used, so a
//! broken config never takes the CLI down.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::config::presets::AvoidancePreset;
use crate::core::initiative::Initiative;
use crate::core::phase::Phase;
use crate::core::{
    default_phase_allocation, default_risk_weights, ScenarioInputs, DEFAULT_BLENDED_RATE,
    DEFAULT_TOTAL_HOURS,
};
use crate::error::ShiftmapError;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "shiftmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenario: ScenarioSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSection {
    #[serde(default = "default_total_hours")]
    pub total_hours: f64,

    #[serde(default = "default_blended_rate")]
    pub blended_rate: f64,

    #[serde(default)]
    pub cost_avoidance: AvoidancePreset,

    /// Percent of total hours per phase; defaults cover all phases.
    #[serde(default = "default_phase_allocation")]
    pub phase_allocation: BTreeMap<Phase, f64>,

    /// Maturity percent per initiative; omitted initiatives are 0.
    #[serde(default)]
    pub maturity: BTreeMap<Initiative, f64>,

    #[serde(default = "default_risk_weights")]
    pub risk_weights: BTreeMap<Phase, f64>,
}

fn default_total_hours() -> f64 {
    DEFAULT_TOTAL_HOURS
}

fn default_blended_rate() -> f64 {
    DEFAULT_BLENDED_RATE
}

impl Default for ScenarioSection {
    fn default() -> Self {
        Self {
            total_hours: DEFAULT_TOTAL_HOURS,
            blended_rate: DEFAULT_BLENDED_RATE,
            cost_avoidance: AvoidancePreset::default(),
            phase_allocation: default_phase_allocation(),
            maturity: BTreeMap::new(),
            risk_weights: default_risk_weights(),
        }
    }
}

impl ScenarioFile {
    /// Convert to validated engine inputs.
    pub fn into_inputs(self) -> Result<ScenarioInputs, ShiftmapError> {
        let section = self.scenario;
        let inputs = ScenarioInputs {
            total_hours: section.total_hours,
            blended_rate: section.blended_rate,
            phase_allocation: section.phase_allocation,
            maturity_levels: section.maturity,
            risk_weights: section.risk_weights,
            cost_avoidance: section.cost_avoidance.to_config(),
        };
        inputs.validate()?;
        Ok(inputs)
    }
}

/// Read a scenario file's contents.
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate scenario inputs from a TOML string.
pub fn parse_scenario(contents: &str) -> Result<ScenarioInputs, String> {
    let file: ScenarioFile =
        toml::from_str(contents).map_err(|e| format!("failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    file.into_inputs().map_err(|e| e.to_string())
}

/// Try loading scenario inputs from one path, warning instead of failing.
pub(crate) fn try_load_from_path(config_path: &Path) -> Option<ScenarioInputs> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_scenario(&contents) {
        Ok(inputs) => {
            log::debug!("loaded scenario from {}", config_path.display());
            Some(inputs)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "file not found" is the normal case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "failed to read scenario file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub(crate) fn directory_ancestors(
    start: PathBuf,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Load scenario inputs: from an explicit path when given, otherwise from
/// the nearest `shiftmap.toml` up the directory tree, otherwise defaults.
pub fn load_scenario(explicit: Option<&Path>) -> anyhow::Result<ScenarioInputs> {
    if let Some(path) = explicit {
        let contents = read_config_file(path).map_err(|source| ShiftmapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let inputs = parse_scenario(&contents).map_err(|message| ShiftmapError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        return Ok(inputs);
    }

    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {}. Using defaults.", e);
            return Ok(ScenarioInputs::default());
        }
    };

    Ok(directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_from_path(&path))
        .unwrap_or_default())
}

/// Commented template written by `shiftmap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Shiftmap scenario

[scenario]
total_hours = 17054.0
blended_rate = 100.0
# one of: none, minimal, conservative, moderate, aggressive, maximum
cost_avoidance = "moderate"

# Percent of total hours per phase; must sum to 100.
[scenario.phase_allocation]
discover = 5.0
plan = 10.0
design = 15.0
build = 25.0
test = 20.0
deploy = 10.0
post-go-live = 15.0

# Initiative maturity in percent (0-100); omitted initiatives count as 0.
[scenario.maturity]
modernization-tooling = 0.0
ai-automation = 0.0
migration-accelerators = 0.0
preconfigured-environments = 0.0
automated-testing = 0.0
data-conversion-toolkit = 0.0
integration-code-reuse = 0.0

# Reporting-only multipliers applied to modeled hours.
[scenario.risk_weights]
discover = 1.0
plan = 2.0
design = 3.0
build = 4.0
test = 5.0
deploy = 6.0
post-go-live = 7.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults_with_moderate_avoidance() {
        let inputs = parse_scenario("").unwrap();
        let defaults = ScenarioInputs::default();
        assert_eq!(inputs.total_hours, defaults.total_hours);
        assert_eq!(inputs.phase_allocation, defaults.phase_allocation);
        assert_eq!(inputs.cost_avoidance, AvoidancePreset::Moderate.to_config());
    }

    #[test]
    fn template_parses_and_validates() {
        let inputs = parse_scenario(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(inputs.total_hours, DEFAULT_TOTAL_HOURS);
        assert!(inputs.maturity_levels.values().all(|&m| m == 0.0));
    }

    #[test]
    fn partial_section_fills_defaults() {
        let inputs = parse_scenario(
            r#"
[scenario]
total_hours = 9000.0

[scenario.maturity]
automated-testing = 40.0
"#,
        )
        .unwrap();
        assert_eq!(inputs.total_hours, 9000.0);
        assert_eq!(inputs.blended_rate, DEFAULT_BLENDED_RATE);
        assert_eq!(
            inputs.maturity_levels.get(&Initiative::AutomatedTesting),
            Some(&40.0)
        );
    }

    #[test]
    fn bad_allocation_is_rejected() {
        let result = parse_scenario(
            r#"
[scenario.phase_allocation]
discover = 90.0
plan = 90.0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_scenario("[scenario]\nhours = 1.0\n").is_err());
    }
}
