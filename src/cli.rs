use crate::config::presets::AvoidancePreset;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::report::writer::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shiftmap")]
#[command(about = "Delivery-efficiency savings modeler", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one scenario and report hours, costs, roles and categories
    Analyze {
        /// Scenario file (defaults to the nearest shiftmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override total project hours
        #[arg(long)]
        total_hours: Option<f64>,

        /// Override the blended hourly rate
        #[arg(long)]
        blended_rate: Option<f64>,

        /// Maturity overrides as initiative=percent pairs
        #[arg(long = "maturity", value_delimiter = ',')]
        maturity: Option<Vec<String>>,

        /// Set every initiative to the same maturity percent
        #[arg(long)]
        all_maturity: Option<f64>,

        /// Cost-avoidance preset
        #[arg(long, value_enum)]
        cost_avoidance: Option<AvoidancePreset>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sweep uniform maturity from 0 to 100% for sensitivity analysis
    Sweep {
        /// Scenario file (defaults to the nearest shiftmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maturity increment per step, in percent
        #[arg(long, default_value = "10")]
        step: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a commented shiftmap.toml template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
