use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

const MONTHS_PER_YEAR: u32 = 12;

/// flat interest: charged once on the financed amount, prorated by tenor in years
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatInterestEngine;

impl FlatInterestEngine {
    pub fn new() -> Self {
        Self
    }

    /// total interest over the whole tenor; `None` when the amount overflows
    pub fn total_interest(
        &self,
        financed: Money,
        annual_rate: Rate,
        tenor_months: u32,
    ) -> Option<Money> {
        // multiply before dividing so whole-year tenors stay exact
        let interest = financed
            .as_decimal()
            .checked_mul(annual_rate.as_decimal())?
            .checked_mul(Decimal::from(tenor_months))?
            / Decimal::from(MONTHS_PER_YEAR);
        Some(Money::from_decimal(interest))
    }

    /// interest share of each monthly installment
    pub fn monthly_interest(&self, financed: Money, annual_rate: Rate) -> Option<Money> {
        financed.checked_apply_rate(annual_rate.monthly_rate())
    }

    /// principal share of each monthly installment; `None` for a zero tenor
    pub fn monthly_principal(&self, financed: Money, tenor_months: u32) -> Option<Money> {
        financed.checked_div(Decimal::from(tenor_months))
    }
}
