use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundPerfError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Convergence failure: root-finder did not converge after {iterations} iterations (delta: {last_delta})")]
    ConvergenceFailure {
        iterations: u32,
        last_delta: Decimal,
    },

    #[error("Numerical overflow in {context}")]
    NumericalOverflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FundPerfError {
    fn from(e: serde_json::Error) -> Self {
        FundPerfError::SerializationError(e.to_string())
    }
}
