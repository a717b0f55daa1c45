use clap::Args;
use serde_json::Value;

use fund_perf_core::CashFlowSeries;

use crate::input;

/// Arguments for the timeline command
#[derive(Args)]
pub struct TimelineArgs {
    /// Path to a cash-flow CSV with Date, Type, Amount columns
    /// (omit to pipe CSV on stdin)
    #[arg(long)]
    pub input: Option<String>,
}

/// Cash flows over time from the investor's perspective: calls negative,
/// distributions and NAV marks positive.
pub fn run_timeline(args: TimelineArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::load_records(args.input.as_deref())?;
    let series = CashFlowSeries::build(records)?;

    let rows: Vec<Value> = series
        .records()
        .iter()
        .map(|r| {
            serde_json::json!({
                "date": r.date,
                "type": r.kind,
                "signed_amount": r.signed_amount(),
            })
        })
        .collect();

    Ok(Value::Array(rows))
}
