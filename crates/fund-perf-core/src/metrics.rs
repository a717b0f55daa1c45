use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::series::CashFlowSeries;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, FlowKind, Money, Multiple, Rate};
use crate::FundPerfResult;

/// Newton-Raphson starting point for the IRR solve
const IRR_INITIAL_GUESS: Decimal = dec!(0.10);

/// Multiple on Invested Capital at full precision:
/// (total distributions + latest NAV) / total calls.
///
/// Returns `None` when the series has no capital calls; a fund that never
/// called capital has no meaningful multiple.
pub fn moic(series: &CashFlowSeries) -> Option<Multiple> {
    if series.total_calls() <= Decimal::ZERO {
        return None;
    }
    let nav = series.latest_nav().unwrap_or(Decimal::ZERO);
    Some((series.total_distributions() + nav) / series.total_calls())
}

/// Date-weighted IRR (XIRR, actual/365) as a percentage at full precision.
///
/// `None` covers both undefined inputs (fewer than 2 dated flows) and solver
/// non-convergence; losses come back as a negative percentage, not `None`.
pub fn irr(series: &CashFlowSeries) -> Option<Rate> {
    let flows = dated_flows(series);
    if flows.len() < 2 {
        return None;
    }
    match time_value::xirr(&flows, IRR_INITIAL_GUESS) {
        Ok(rate) => Some(rate * dec!(100)),
        Err(_) => None,
    }
}

/// Signed cash-flow vector for the solver: per-record signed amounts in
/// chronological order with NAV marks excluded, then the latest NAV appended
/// once as a terminal distribution.
fn dated_flows(series: &CashFlowSeries) -> Vec<(NaiveDate, Money)> {
    let mut flows: Vec<(NaiveDate, Money)> = series
        .records()
        .iter()
        .filter(|r| r.kind != FlowKind::Nav)
        .map(|r| (r.date, r.signed_amount()))
        .collect();

    if let (Some(nav), Some(date)) = (series.latest_nav(), series.latest_nav_date()) {
        flows.push((date, nav));
    }

    flows
}

/// Fund performance metrics, rounded for presentation alongside the full
/// precision values they were rounded from.
///
/// `None` means the metric is undefined or did not converge; a present 0.00
/// is a real result and must be displayed as such.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceOutput {
    /// MOIC rounded to 2 decimal places
    pub moic: Option<Multiple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moic_unrounded: Option<Multiple>,
    /// IRR as a percentage rounded to 2 decimal places
    pub irr_pct: Option<Rate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irr_pct_unrounded: Option<Rate>,
    pub total_calls: Money,
    pub total_distributions: Money,
    pub latest_nav: Option<Money>,
    pub latest_nav_date: Option<NaiveDate>,
    pub flow_count: usize,
}

/// Round to the 2-decimal presentation scale, keeping trailing zeros so a
/// 1.3 multiple prints as 1.30.
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Compute MOIC and IRR for a series, wrapped in the standard envelope with
/// warnings explaining any absent metric.
pub fn calculate_performance(
    series: &CashFlowSeries,
) -> FundPerfResult<ComputationOutput<PerformanceOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let moic_full = moic(series);
    if moic_full.is_none() {
        warnings.push("MOIC undefined: series has no capital calls".into());
    }

    let flows = dated_flows(series);
    let irr_full = if flows.len() < 2 {
        warnings.push("IRR requires at least 2 dated cash flows".into());
        None
    } else {
        match time_value::xirr(&flows, IRR_INITIAL_GUESS) {
            Ok(rate) => Some(rate * dec!(100)),
            Err(e) => {
                warnings.push(format!("IRR calculation warning: {e}"));
                None
            }
        }
    };

    let output = PerformanceOutput {
        moic: moic_full.map(round2),
        moic_unrounded: moic_full,
        irr_pct: irr_full.map(round2),
        irr_pct_unrounded: irr_full,
        total_calls: series.total_calls(),
        total_distributions: series.total_distributions(),
        latest_nav: series.latest_nav(),
        latest_nav_date: series.latest_nav_date(),
        flow_count: series.len(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fund performance: MOIC and date-weighted IRR (XIRR, actual/365)",
        &serde_json::json!({
            "irr_initial_guess": IRR_INITIAL_GUESS.to_string(),
            "day_count": "actual/365",
        }),
        warnings,
        elapsed,
        output,
    ))
}
