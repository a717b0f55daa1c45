use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FundPerfError;
use crate::types::{CashFlowRecord, FlowKind, Money};
use crate::FundPerfResult;

/// A read-only, chronologically ordered view over cash-flow records, with the
/// aggregates both performance metrics are defined in terms of.
///
/// If the input holds multiple NAV records, only the chronologically latest
/// one is authoritative; earlier NAV records stay in the record list for
/// display but are ignored by the aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowSeries {
    records: Vec<CashFlowRecord>,
    total_calls: Money,
    total_distributions: Money,
    latest_nav: Option<Money>,
    latest_nav_date: Option<NaiveDate>,
}

impl CashFlowSeries {
    /// Build a series from records in any order.
    ///
    /// The sort is stable, so records sharing a date keep their input order.
    /// An empty input is valid and yields identity aggregates. Magnitudes are
    /// expected to be pre-validated; a negative amount fails fast.
    pub fn build(records: Vec<CashFlowRecord>) -> FundPerfResult<Self> {
        for (i, record) in records.iter().enumerate() {
            if record.amount < Decimal::ZERO {
                return Err(FundPerfError::InvalidRecord {
                    row: i + 1,
                    reason: format!("amount must be non-negative, got {}", record.amount),
                });
            }
        }

        let mut records = records;
        records.sort_by_key(|r| r.date);

        let mut total_calls = Decimal::ZERO;
        let mut total_distributions = Decimal::ZERO;
        let mut latest_nav = None;
        let mut latest_nav_date = None;

        for record in &records {
            match record.kind {
                FlowKind::CapitalCall => total_calls += record.amount,
                FlowKind::Distribution => total_distributions += record.amount,
                // Ascending stable order means the last NAV seen wins
                FlowKind::Nav => {
                    latest_nav = Some(record.amount);
                    latest_nav_date = Some(record.date);
                }
            }
        }

        Ok(Self {
            records,
            total_calls,
            total_distributions,
            latest_nav,
            latest_nav_date,
        })
    }

    /// Records sorted by date ascending, input order preserved within a date.
    pub fn records(&self) -> &[CashFlowRecord] {
        &self.records
    }

    /// Sum of capital-call amounts
    pub fn total_calls(&self) -> Money {
        self.total_calls
    }

    /// Sum of distribution amounts
    pub fn total_distributions(&self) -> Money {
        self.total_distributions
    }

    /// Amount of the chronologically latest NAV record, if any
    pub fn latest_nav(&self) -> Option<Money> {
        self.latest_nav
    }

    /// Date of the chronologically latest NAV record, if any
    pub fn latest_nav_date(&self) -> Option<NaiveDate> {
        self.latest_nav_date
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
