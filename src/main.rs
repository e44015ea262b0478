use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

use broker_roi::cmd::{self, AssumptionArgs, GridArgs};
use broker_roi::error::ErrorFormatter;

/// IT broker vs in-house procurement ROI calculator
///
/// broker-roi compares the savings, time value and opportunity value of
/// using an IT broker against running procurement in-house, with
/// discounted multi-year projections and sensitivity analysis.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Configuration file (default: ./.broker-roi.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare in-house procurement with the IT broker
    Compare {
        #[command(flatten)]
        assumptions: AssumptionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also export the comparison table as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Discounted multi-year projection of the broker scenario
    Project {
        #[command(flatten)]
        assumptions: AssumptionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Category-rate benefit, outsourced vs in-house
    Category {
        /// Spend category, e.g. "Cloud Services"
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// List the category rate table
        #[arg(long)]
        list: bool,

        #[command(flatten)]
        assumptions: AssumptionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Total ROI across a grid of savings and fee percentages
    Sensitivity {
        #[command(flatten)]
        assumptions: AssumptionArgs,

        #[command(flatten)]
        grid: GridArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also export the grid as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Initialize broker-roi configuration from a domain preset
    Init {
        /// Domain preset: Telecom, Mobility & IoT, Cloud & SaaS, Security, Governance, All
        #[arg(short, long, default_value = "All")]
        domain: String,

        /// List the domain presets
        #[arg(long)]
        list: bool,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let root = std::env::current_dir()?;
    let resolve = |args: &AssumptionArgs| args.resolve(config, &root);

    match &cli.command {
        Some(Commands::Compare {
            assumptions,
            json,
            csv,
        }) => cmd::cmd_compare(&resolve(assumptions)?, *json, csv.as_deref()),
        Some(Commands::Project { assumptions, json }) => {
            cmd::cmd_project(&resolve(assumptions)?, *json)
        }
        Some(Commands::Category {
            category,
            list,
            assumptions,
            json,
        }) => cmd::cmd_category(&resolve(assumptions)?, category.as_deref(), *list, *json),
        Some(Commands::Sensitivity {
            assumptions,
            grid,
            json,
            csv,
        }) => cmd::cmd_sensitivity(&resolve(assumptions)?, grid, *json, csv.as_deref()),
        Some(Commands::Init {
            domain,
            list,
            force,
        }) => cmd::cmd_init(domain, *list, *force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();
    broker_roi::fmt::set_emoji_enabled(!cli.no_emoji);

    if let Err(e) = run(&cli) {
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_sensitivity_parses_range_flags() {
        let cli = Cli::try_parse_from([
            "broker-roi",
            "sensitivity",
            "--savings-range",
            "10,40",
            "--fee-step",
            "1",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Sensitivity { grid, .. }) => {
                assert_eq!(grid.savings_range, Some((10.0, 40.0)));
                assert_eq!(grid.fee_step, Some(1.0));
            }
            _ => panic!("expected sensitivity"),
        }
    }

    #[test]
    fn test_around_conflicts_with_ranges() {
        assert!(Cli::try_parse_from([
            "broker-roi",
            "sensitivity",
            "--around",
            "--fee-range",
            "8,12",
        ])
        .is_err());
    }
}
