//! The `analyze` command: load a scenario, apply CLI overrides, run the
//! engine and write the report.

use crate::config;
use crate::config::presets::AvoidancePreset;
use crate::core::initiative::Initiative;
use crate::core::ScenarioInputs;
use crate::engine;
use crate::report::plausibility_warning;
use crate::report::writer::{create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub config: Option<PathBuf>,
    pub total_hours: Option<f64>,
    pub blended_rate: Option<f64>,
    pub maturity: Option<Vec<String>>,
    pub all_maturity: Option<f64>,
    pub cost_avoidance: Option<AvoidancePreset>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_analyze(config: AnalyzeConfig) -> Result<()> {
    let mut inputs = config::load_scenario(config.config.as_deref())?;
    apply_overrides(&mut inputs, &config)?;
    inputs.validate()?;

    let results = engine::builtin_engine().run(&inputs);

    if let Some(warning) = plausibility_warning(&results.kpis) {
        log::warn!("{}", warning);
    }

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, writer).write_results(&results)
}

fn apply_overrides(inputs: &mut ScenarioInputs, config: &AnalyzeConfig) -> Result<()> {
    if let Some(total_hours) = config.total_hours {
        inputs.total_hours = total_hours;
    }
    if let Some(blended_rate) = config.blended_rate {
        inputs.blended_rate = blended_rate;
    }
    if let Some(pct) = config.all_maturity {
        inputs.maturity_levels = Initiative::ALL.into_iter().map(|i| (i, pct)).collect();
    }
    if let Some(pairs) = &config.maturity {
        let overrides = parse_maturity_overrides(pairs)?;
        inputs.maturity_levels.extend(overrides);
    }
    if let Some(preset) = config.cost_avoidance {
        inputs.cost_avoidance = preset.to_config();
    }
    Ok(())
}

/// Parse `initiative=percent` pairs from the command line.
pub fn parse_maturity_overrides(pairs: &[String]) -> Result<BTreeMap<Initiative, f64>> {
    pairs
        .iter()
        .map(|pair| {
            let (name, value) = pair
                .split_once('=')
                .with_context(|| format!("expected initiative=percent, got '{}'", pair))?;
            let initiative = Initiative::parse(name)
                .with_context(|| format!("unknown initiative '{}'", name))?;
            let pct: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("invalid maturity percent '{}'", value))?;
            Ok((initiative, pct))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_initiative_pairs() {
        let pairs = vec![
            "automated-testing=50".to_string(),
            "ai-automation=25.5".to_string(),
        ];
        let overrides = parse_maturity_overrides(&pairs).unwrap();
        assert_eq!(overrides[&Initiative::AutomatedTesting], 50.0);
        assert_eq!(overrides[&Initiative::AiAutomation], 25.5);
    }

    #[test]
    fn rejects_unknown_initiative() {
        let pairs = vec!["blockchain=50".to_string()];
        assert!(parse_maturity_overrides(&pairs).is_err());
    }

    #[test]
    fn rejects_missing_equals() {
        let pairs = vec!["automated-testing".to_string()];
        assert!(parse_maturity_overrides(&pairs).is_err());
    }

    #[test]
    fn all_maturity_override_covers_catalog() {
        let mut inputs = ScenarioInputs::default();
        let config = AnalyzeConfig {
            config: None,
            total_hours: None,
            blended_rate: None,
            maturity: None,
            all_maturity: Some(75.0),
            cost_avoidance: None,
            format: OutputFormat::Json,
            output: None,
        };
        apply_overrides(&mut inputs, &config).unwrap();
        assert_eq!(inputs.maturity_levels.len(), Initiative::COUNT);
        assert!(inputs.maturity_levels.values().all(|&m| m == 75.0));
    }
}
