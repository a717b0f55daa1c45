pub mod error;
pub mod metrics;
pub mod series;
pub mod time_value;
pub mod types;

pub use error::FundPerfError;
pub use series::CashFlowSeries;
pub use types::*;

/// Standard result type for all fund-perf operations
pub type FundPerfResult<T> = Result<T, FundPerfError>;
