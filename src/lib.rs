pub mod config;
pub mod decimal;
pub mod errors;
pub mod estimator;
pub mod format;
pub mod interest;
pub mod payments;
pub mod types;

// re-export key types
pub use config::EstimatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{CreditError, Result};
pub use estimator::CreditEstimator;
pub use format::{CurrencyFormat, QuoteView};
pub use interest::{FlatInterestEngine, RateTable, RateTier};
pub use payments::{InstallmentSchedule, ScheduledInstallment};
pub use types::{CreditQuoteInput, CreditQuoteResult, TenorQuote};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;

/// flat annual rate for a tenor using the dealership rate card
pub fn rate_for_tenor(tenor_months: u32) -> Rate {
    RateTable::dealership_default().rate_for(tenor_months)
}

/// credit quote under the default dealership configuration
pub fn quote(
    principal: Money,
    down_payment_percent: Decimal,
    tenor_months: u32,
) -> Result<CreditQuoteResult> {
    CreditEstimator::default().quote(principal, down_payment_percent, tenor_months)
}

/// rupiah string with no fractional digits, e.g. `Rp 47.500.000`
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::idr().format(amount)
}
