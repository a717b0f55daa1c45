use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%) unless a field name says percentage.
pub type Rate = Decimal;

/// Multiples (e.g., 1.3x MOIC)
pub type Multiple = Decimal;

/// Classification of a fund cash-flow record.
///
/// Serde names match the tags used by tabular sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowKind {
    #[serde(rename = "Capital Call")]
    CapitalCall,
    Distribution,
    #[serde(rename = "NAV")]
    Nav,
}

/// A single dated, typed cash-flow record.
///
/// `amount` is a non-negative magnitude; direction is a property of the kind,
/// not of the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub amount: Money,
}

impl CashFlowRecord {
    /// Investor-perspective signed amount: capital calls are cash leaving the
    /// investor, distributions and NAV marks are value coming back. The sign
    /// mapping lives here and nowhere else.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            FlowKind::CapitalCall => -self.amount,
            FlowKind::Distribution | FlowKind::Nav => self.amount,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
