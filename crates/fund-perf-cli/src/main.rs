mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::AnalyzeArgs;
use commands::timeline::TimelineArgs;

/// Private-markets fund performance metrics
#[derive(Parser)]
#[command(
    name = "fpa",
    version,
    about = "Private-markets fund performance metrics",
    long_about = "Computes MOIC and date-weighted IRR (XIRR, actual/365) from an \
                  irregular series of capital calls, distributions, and NAV marks, \
                  supplied as a CSV with Date, Type, Amount columns."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute MOIC and IRR from a cash-flow CSV
    Analyze(AnalyzeArgs),
    /// List cash flows over time with investor-perspective signed amounts
    Timeline(TimelineArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Timeline(args) => commands::timeline::run_timeline(args),
        Commands::Version => {
            println!("fpa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
