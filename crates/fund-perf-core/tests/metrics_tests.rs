use chrono::NaiveDate;
use fund_perf_core::metrics::{self, calculate_performance};
use fund_perf_core::{CashFlowRecord, CashFlowSeries, FlowKind};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn record(y: i32, m: u32, d: u32, kind: FlowKind, amount: Decimal) -> CashFlowRecord {
    CashFlowRecord {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        kind,
        amount,
    }
}

// ===========================================================================
// MOIC
// ===========================================================================

#[test]
fn test_moic_absent_when_no_calls() {
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::Distribution, dec!(50)),
        record(2022, 1, 1, FlowKind::Nav, dec!(80)),
    ])
    .unwrap();
    assert_eq!(metrics::moic(&series), None);

    let empty = CashFlowSeries::build(vec![]).unwrap();
    assert_eq!(metrics::moic(&empty), None);
}

#[test]
fn test_moic_known_answer() {
    // calls=100, distributions=50, NAV=80 => (50+80)/100 = 1.30
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        record(2022, 1, 1, FlowKind::Distribution, dec!(50)),
        record(2023, 1, 1, FlowKind::Nav, dec!(80)),
    ])
    .unwrap();
    let out = calculate_performance(&series).unwrap();
    assert_eq!(out.result.moic, Some(dec!(1.30)));
}

#[test]
fn test_moic_zero_is_present_not_absent() {
    // A total loss is a computed 0.00 multiple, not "N/A"
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        record(2022, 1, 1, FlowKind::Nav, dec!(0)),
    ])
    .unwrap();
    let out = calculate_performance(&series).unwrap();
    assert_eq!(out.result.moic, Some(dec!(0.00)));
}

// ===========================================================================
// IRR
// ===========================================================================

#[test]
fn test_irr_doubling_over_one_year_is_100_pct() {
    // 100 called on day 0, NAV 200 on day 365: actual/365 annual rate = 100%
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        record(2022, 1, 1, FlowKind::Nav, dec!(200)),
    ])
    .unwrap();
    let out = calculate_performance(&series).unwrap();
    assert_eq!(out.result.irr_pct, Some(dec!(100.00)));
}

#[test]
fn test_irr_absent_for_single_record() {
    for kind in [FlowKind::CapitalCall, FlowKind::Distribution, FlowKind::Nav] {
        let series =
            CashFlowSeries::build(vec![record(2021, 1, 1, kind, dec!(100))]).unwrap();
        assert_eq!(metrics::irr(&series), None, "kind {kind:?}");
    }
}

#[test]
fn test_irr_negative_for_a_loss_not_absent() {
    // Returned value below called capital: a loss must come back as a
    // negative percentage, with absence reserved for non-convergence
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        record(2022, 1, 1, FlowKind::Nav, dec!(50)),
    ])
    .unwrap();
    let out = calculate_performance(&series).unwrap();
    let pct = out.result.irr_pct.expect("loss should still produce a rate");
    assert_eq!(pct, dec!(-50.00));
}

#[test]
fn test_irr_calls_only_does_not_converge() {
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        record(2022, 1, 1, FlowKind::CapitalCall, dec!(100)),
    ])
    .unwrap();
    assert_eq!(metrics::irr(&series), None);
}

#[test]
fn test_irr_mixed_series_known_range() {
    // Two calls, one interim distribution, terminal NAV; a gain overall, so
    // the rate is positive and well under the doubling case
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(600)),
        record(2021, 7, 1, FlowKind::CapitalCall, dec!(400)),
        record(2022, 7, 1, FlowKind::Distribution, dec!(300)),
        record(2023, 1, 1, FlowKind::Nav, dec!(900)),
    ])
    .unwrap();
    let pct = metrics::irr(&series).unwrap();
    assert!(pct > dec!(5) && pct < dec!(40), "got {pct}");
}

// ===========================================================================
// NAV selection and ordering
// ===========================================================================

#[test]
fn test_latest_nav_used_earlier_nav_retained() {
    let earlier_nav = record(2021, 6, 1, FlowKind::Nav, dec!(999));
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(100)),
        earlier_nav.clone(),
        record(2022, 1, 1, FlowKind::Nav, dec!(200)),
    ])
    .unwrap();

    // Metrics see only the later mark
    assert_eq!(metrics::moic(&series), Some(dec!(2)));
    let out = calculate_performance(&series).unwrap();
    assert_eq!(out.result.irr_pct, Some(dec!(100.00)));
    assert_eq!(out.result.latest_nav, Some(dec!(200)));

    // The earlier mark still appears unchanged in the record listing
    assert!(series.records().contains(&earlier_nav));
}

#[test]
fn test_build_is_permutation_independent() {
    let records = vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(60)),
        record(2021, 6, 1, FlowKind::CapitalCall, dec!(40)),
        record(2022, 1, 1, FlowKind::Distribution, dec!(50)),
        record(2022, 6, 1, FlowKind::Nav, dec!(80)),
    ];
    let mut shuffled = records.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    let a = CashFlowSeries::build(records).unwrap();
    let b = CashFlowSeries::build(shuffled).unwrap();

    assert_eq!(a.records(), b.records());
    assert_eq!(a.total_calls(), b.total_calls());
    assert_eq!(a.total_distributions(), b.total_distributions());
    assert_eq!(a.latest_nav(), b.latest_nav());
    assert_eq!(a.latest_nav_date(), b.latest_nav_date());
    assert_eq!(metrics::moic(&a), metrics::moic(&b));
    assert_eq!(metrics::irr(&a), metrics::irr(&b));
}

// ===========================================================================
// Rounding boundary
// ===========================================================================

#[test]
fn test_rounded_values_match_unrounded_at_2dp() {
    // Awkward magnitudes so neither metric lands on a 2dp boundary
    let series = CashFlowSeries::build(vec![
        record(2021, 1, 1, FlowKind::CapitalCall, dec!(97)),
        record(2021, 9, 14, FlowKind::Distribution, dec!(13)),
        record(2022, 11, 2, FlowKind::Nav, dec!(131)),
    ])
    .unwrap();
    let out = calculate_performance(&series).unwrap().result;

    let moic_unrounded = out.moic_unrounded.unwrap();
    assert_eq!(out.moic, Some(moic_unrounded.round_dp(2)));
    assert_eq!(moic_unrounded, metrics::moic(&series).unwrap());

    let irr_unrounded = out.irr_pct_unrounded.unwrap();
    assert_eq!(out.irr_pct, Some(irr_unrounded.round_dp(2)));
    assert_eq!(irr_unrounded, metrics::irr(&series).unwrap());
}
