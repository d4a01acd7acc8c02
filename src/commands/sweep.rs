//! The `sweep` command: evaluate the model at a ladder of uniform maturity
//! levels. Runs are independent and the engine is shared read-only, so the
//! ladder evaluates in parallel.

use crate::config;
use crate::core::initiative::Initiative;
use crate::engine;
use crate::report::writer::{format_currency, format_hours, format_percent, OutputFormat};
use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct SweepConfig {
    pub config: Option<PathBuf>,
    pub step: f64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// One evaluated point of the maturity ladder.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub maturity_pct: f64,
    pub total_hours_saved: f64,
    pub total_hours_saved_pct: f64,
    pub total_cost_savings: f64,
    pub total_cost_avoidance: f64,
    pub total_financial_benefit: f64,
}

pub fn run_sweep(config: SweepConfig) -> Result<()> {
    if !config.step.is_finite() || config.step <= 0.0 || config.step > 100.0 {
        bail!("sweep step must be in (0, 100], got {}", config.step);
    }

    let base_inputs = config::load_scenario(config.config.as_deref())?;
    base_inputs.validate()?;
    let engine = engine::builtin_engine();

    let mut levels: Vec<f64> = Vec::new();
    let mut level = 0.0;
    while level < 100.0 {
        levels.push(level);
        level += config.step;
    }
    levels.push(100.0);

    let points: Vec<SweepPoint> = levels
        .par_iter()
        .map(|&pct| {
            let mut inputs = base_inputs.clone();
            inputs.maturity_levels = Initiative::ALL.into_iter().map(|i| (i, pct)).collect();
            let kpis = engine.run(&inputs).kpis;
            SweepPoint {
                maturity_pct: pct,
                total_hours_saved: kpis.total_hours_saved,
                total_hours_saved_pct: kpis.total_hours_saved_pct,
                total_cost_savings: kpis.total_cost_savings,
                total_cost_avoidance: kpis.total_cost_avoidance,
                total_financial_benefit: kpis.total_financial_benefit,
            }
        })
        .collect();

    write_points(&points, config.format, config.output.as_deref())
}

fn write_points(
    points: &[SweepPoint],
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(points)?;
            writer.write_all(json.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "# Maturity Sensitivity Sweep")?;
            writeln!(writer)?;
            writeln!(
                writer,
                "| Maturity | Hours Saved | % Saved | Cost Savings | Cost Avoidance | Total Benefit |"
            )?;
            writeln!(
                writer,
                "|----------|-------------|---------|--------------|----------------|---------------|"
            )?;
            for point in points {
                writeln!(
                    writer,
                    "| {} | {} | {} | {} | {} | {} |",
                    format_percent(point.maturity_pct),
                    format_hours(point.total_hours_saved),
                    format_percent(point.total_hours_saved_pct),
                    format_currency(point.total_cost_savings),
                    format_currency(point.total_cost_avoidance),
                    format_currency(point.total_financial_benefit),
                )?;
            }
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec![
                "Maturity",
                "Hours Saved",
                "% Saved",
                "Cost Savings",
                "Cost Avoidance",
                "Total Benefit",
            ]);
            for point in points {
                table.add_row(vec![
                    Cell::new(format_percent(point.maturity_pct))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_hours(point.total_hours_saved))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_percent(point.total_hours_saved_pct))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_currency(point.total_cost_savings))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_currency(point.total_cost_avoidance))
                        .set_alignment(CellAlignment::Right),
                    Cell::new(format_currency(point.total_financial_benefit))
                        .set_alignment(CellAlignment::Right),
                ]);
            }
            writeln!(writer, "{table}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_validation_bounds() {
        for bad_step in [0.0, -5.0, 150.0, f64::NAN] {
            let config = SweepConfig {
                config: None,
                step: bad_step,
                format: OutputFormat::Json,
                output: None,
            };
            assert!(run_sweep(config).is_err());
        }
    }
}
