use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CreditError, Result};

/// inputs to a single credit simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditQuoteInput {
    /// vehicle price
    pub principal: Money,
    /// down payment as a percentage of price, 0..=100
    pub down_payment_percent: Decimal,
    pub tenor_months: u32,
}

impl CreditQuoteInput {
    pub fn new(principal: Money, down_payment_percent: Decimal, tenor_months: u32) -> Self {
        Self {
            principal,
            down_payment_percent,
            tenor_months,
        }
    }

    /// reject inputs that would produce meaningless or undefined results
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(CreditError::validation(
                "principal",
                format!("must be greater than zero, got {}", self.principal),
            ));
        }

        if self.down_payment_percent < Decimal::ZERO
            || self.down_payment_percent > Decimal::ONE_HUNDRED
        {
            return Err(CreditError::validation(
                "down_payment_percent",
                format!("must be within 0..=100, got {}", self.down_payment_percent),
            ));
        }

        if self.tenor_months == 0 {
            return Err(CreditError::validation(
                "tenor_months",
                "must be at least one month",
            ));
        }

        Ok(())
    }
}

/// derived result of a credit simulation
///
/// values carry full internal precision; round only when displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditQuoteResult {
    /// flat annual interest rate, serialized as a fraction ("0.068" for 6.8%);
    /// see `interest_rate_percent_per_year` for the percent figure
    pub interest_rate: Rate,
    pub down_payment_amount: Money,
    pub financed_principal: Money,
    pub total_interest: Money,
    pub total_loan_payable: Money,
    pub monthly_installment: Money,
    /// down payment plus insurance and administrative loading (TDP)
    pub total_initial_payment: Money,
}

impl CreditQuoteResult {
    /// interest rate expressed in percent per year (6.8 for 6.8%)
    pub fn interest_rate_percent_per_year(&self) -> Decimal {
        self.interest_rate.as_percentage()
    }
}

/// one row of a tenor or down payment comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenorQuote {
    pub tenor_months: u32,
    pub down_payment_percent: Decimal,
    pub result: CreditQuoteResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_input() {
        let input = CreditQuoteInput::new(Money::from_major(150_000_000), dec!(30), 36);
        assert!(input.validate().is_ok());

        // both ends of the down payment range are allowed
        let zero_dp = CreditQuoteInput::new(Money::from_major(1), dec!(0), 1);
        assert!(zero_dp.validate().is_ok());
        let full_dp = CreditQuoteInput::new(Money::from_major(1), dec!(100), 1);
        assert!(full_dp.validate().is_ok());
    }

    #[test]
    fn test_zero_tenor_rejected() {
        let input = CreditQuoteInput::new(Money::from_major(100_000_000), dec!(20), 0);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some("tenor_months"));
    }

    #[test]
    fn test_non_positive_principal_rejected() {
        let negative = CreditQuoteInput::new(Money::from_major(-5), dec!(20), 12);
        assert_eq!(negative.validate().unwrap_err().field(), Some("principal"));

        let zero = CreditQuoteInput::new(Money::ZERO, dec!(20), 12);
        assert_eq!(zero.validate().unwrap_err().field(), Some("principal"));
    }

    #[test]
    fn test_down_payment_out_of_range_rejected() {
        let over = CreditQuoteInput::new(Money::from_major(100), dec!(100.01), 12);
        assert_eq!(over.validate().unwrap_err().field(), Some("down_payment_percent"));

        let under = CreditQuoteInput::new(Money::from_major(100), dec!(-1), 12);
        let err = under.validate().unwrap_err();
        assert_eq!(err.field(), Some("down_payment_percent"));
        assert!(err.to_string().contains("down_payment_percent"));
    }

    #[test]
    fn test_result_serializes_rate_as_fraction() {
        let result = CreditQuoteResult {
            interest_rate: Rate::from_percentage_decimal(dec!(6.8)),
            down_payment_amount: Money::from_major(40_000_000),
            financed_principal: Money::from_major(160_000_000),
            total_interest: Money::from_major(54_400_000),
            total_loan_payable: Money::from_major(214_400_000),
            monthly_installment: Money::from_major(3_573_333),
            total_initial_payment: Money::from_major(47_500_000),
        };

        let json = serde_json::to_value(result).unwrap();
        let encoded: Decimal = json["interest_rate"].as_str().unwrap().parse().unwrap();
        assert_eq!(encoded, dec!(0.068));
        assert_eq!(result.interest_rate_percent_per_year(), dec!(6.8));
    }
}
