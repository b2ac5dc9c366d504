use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{CreditError, Result};

/// one step of the tenor-keyed rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// inclusive upper bound of the tenor bracket, in months
    pub max_tenor_months: u32,
    pub annual_rate: Rate,
}

impl RateTier {
    pub fn new(max_tenor_months: u32, annual_rate: Rate) -> Self {
        Self {
            max_tenor_months,
            annual_rate,
        }
    }
}

/// flat annual rate lookup by loan tenor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    tiers: Vec<RateTier>,
    /// rate for tenors beyond the last tier
    fallback_rate: Rate,
}

impl RateTable {
    pub fn new(tiers: Vec<RateTier>, fallback_rate: Rate) -> Result<Self> {
        let table = Self {
            tiers,
            fallback_rate,
        };
        table.validate()?;
        Ok(table)
    }

    /// dealership rate card: 12/24/36/48/60 month brackets
    pub fn dealership_default() -> Self {
        Self {
            tiers: vec![
                RateTier::new(12, Rate::from_percentage_decimal(dec!(3.5))),
                RateTier::new(24, Rate::from_percentage_decimal(dec!(4.1))),
                RateTier::new(36, Rate::from_percentage_decimal(dec!(4.8))),
                RateTier::new(48, Rate::from_percentage_decimal(dec!(5.5))),
                RateTier::new(60, Rate::from_percentage_decimal(dec!(6.8))),
            ],
            fallback_rate: Rate::from_percentage_decimal(dec!(7.5)),
        }
    }

    /// rate of the first bracket whose bound covers the tenor
    pub fn rate_for(&self, tenor_months: u32) -> Rate {
        self.tiers
            .iter()
            .find(|tier| tenor_months <= tier.max_tenor_months)
            .map(|tier| tier.annual_rate)
            .unwrap_or(self.fallback_rate)
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    pub fn fallback_rate(&self) -> Rate {
        self.fallback_rate
    }

    /// tiers must be strictly ascending and rates non-negative
    pub fn validate(&self) -> Result<()> {
        for pair in self.tiers.windows(2) {
            if pair[1].max_tenor_months <= pair[0].max_tenor_months {
                return Err(CreditError::config(format!(
                    "rate tiers must be strictly ascending: {} months follows {} months",
                    pair[1].max_tenor_months, pair[0].max_tenor_months
                )));
            }
        }

        if let Some(tier) = self.tiers.iter().find(|t| t.annual_rate.is_negative()) {
            return Err(CreditError::config(format!(
                "negative rate {} for tenors up to {} months",
                tier.annual_rate, tier.max_tenor_months
            )));
        }

        if self.fallback_rate.is_negative() {
            return Err(CreditError::config(format!(
                "negative fallback rate {}",
                self.fallback_rate
            )));
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::dealership_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn pct(table: &RateTable, tenor: u32) -> Decimal {
        table.rate_for(tenor).as_percentage()
    }

    #[test]
    fn test_default_brackets() {
        let table = RateTable::dealership_default();

        for tenor in 1..=12 {
            assert_eq!(pct(&table, tenor), dec!(3.5), "tenor {}", tenor);
        }
        for tenor in 13..=24 {
            assert_eq!(pct(&table, tenor), dec!(4.1), "tenor {}", tenor);
        }
        for tenor in 25..=36 {
            assert_eq!(pct(&table, tenor), dec!(4.8), "tenor {}", tenor);
        }
        for tenor in 37..=48 {
            assert_eq!(pct(&table, tenor), dec!(5.5), "tenor {}", tenor);
        }
        for tenor in 49..=60 {
            assert_eq!(pct(&table, tenor), dec!(6.8), "tenor {}", tenor);
        }
        for tenor in [61, 72, 120, u32::MAX] {
            assert_eq!(pct(&table, tenor), dec!(7.5), "tenor {}", tenor);
        }
    }

    #[test]
    fn test_boundary_belongs_to_lower_bracket() {
        let table = RateTable::dealership_default();
        assert_eq!(pct(&table, 12), dec!(3.5));
        assert_eq!(pct(&table, 13), dec!(4.1));
        assert_eq!(pct(&table, 60), dec!(6.8));
    }

    #[test]
    fn test_zero_tenor_uses_first_bracket() {
        let table = RateTable::dealership_default();
        assert_eq!(pct(&table, 0), dec!(3.5));
    }

    #[test]
    fn test_custom_table() {
        let table = RateTable::new(
            vec![RateTier::new(6, Rate::from_percentage_decimal(dec!(2)))],
            Rate::from_percentage_decimal(dec!(9)),
        )
        .unwrap();

        assert_eq!(table.rate_for(6), Rate::from_percentage_decimal(dec!(2)));
        assert_eq!(table.rate_for(7), Rate::from_percentage_decimal(dec!(9)));
    }

    #[test]
    fn test_empty_table_always_falls_back() {
        let table = RateTable::new(Vec::new(), Rate::from_percentage_decimal(dec!(5))).unwrap();
        assert_eq!(table.rate_for(1), Rate::from_percentage_decimal(dec!(5)));
    }

    #[test]
    fn test_unordered_tiers_rejected() {
        let result = RateTable::new(
            vec![
                RateTier::new(24, Rate::from_percentage_decimal(dec!(4))),
                RateTier::new(12, Rate::from_percentage_decimal(dec!(3))),
            ],
            Rate::from_percentage_decimal(dec!(7)),
        );
        assert!(matches!(result, Err(CreditError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = RateTable::new(
            vec![RateTier::new(12, Rate::from_decimal(dec!(-0.01)))],
            Rate::from_percentage_decimal(dec!(7)),
        );
        assert!(result.is_err());
    }
}
