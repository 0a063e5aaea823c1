//! Rate engine error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building a rate table.
#[derive(Debug, Error)]
pub enum RateTableError {
    /// The table contains no entries.
    #[error("Rate table is empty")]
    Empty,

    /// A rate must be a positive number of units per base unit.
    #[error("Rate for {code} must be positive, got {rate}")]
    NonPositiveRate { code: String, rate: Decimal },
}

/// Result type for rate table construction.
pub type RateResult<T> = std::result::Result<T, RateTableError>;
