use clap::Args;
use serde_json::Value;

use fund_perf_core::metrics;
use fund_perf_core::CashFlowSeries;

use crate::input;

/// Arguments for the analyze command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a cash-flow CSV with Date, Type, Amount columns
    /// (omit to pipe CSV on stdin)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let series = CashFlowSeries::build(records)?;
    let result = metrics::calculate_performance(&series)?;
    Ok(serde_json::to_value(result)?)
}
