use anyhow::Result;
use clap::Parser;
use shiftmap::cli::{Cli, Commands};
use shiftmap::commands::{self, AnalyzeConfig, SweepConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            total_hours,
            blended_rate,
            maturity,
            all_maturity,
            cost_avoidance,
            format,
            output,
        } => commands::run_analyze(AnalyzeConfig {
            config,
            total_hours,
            blended_rate,
            maturity,
            all_maturity,
            cost_avoidance,
            format: format.into(),
            output,
        }),
        Commands::Sweep {
            config,
            step,
            format,
            output,
        } => commands::run_sweep(SweepConfig {
            config,
            step,
            format: format.into(),
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
