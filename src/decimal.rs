use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// internal precision carried by every money value
const MONEY_DP: u32 = 8;

/// Money type with 8 decimal places precision; display rounding happens elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_DP))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(MONEY_DP)))
    }

    /// create from whole currency units (rupiah, dollars, ...)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places (banker's rounding)
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// round half away from zero, the way price tags are rounded
    pub fn round_half_up(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// percentage of this amount (e.g., 20% of 200,000,000); `None` on overflow
    pub fn checked_percentage(&self, pct: Decimal) -> Option<Self> {
        self.0
            .checked_mul(pct)?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Money::from_decimal)
    }

    /// apply a fractional rate (e.g., 0.025 for 2.5%); `None` on overflow
    pub fn checked_apply_rate(&self, rate: Rate) -> Option<Self> {
        self.0.checked_mul(rate.as_decimal()).map(Money::from_decimal)
    }

    pub fn checked_add(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }

    /// `None` on overflow or a zero divisor
    pub fn checked_div(self, divisor: Decimal) -> Option<Self> {
        self.0.checked_div(divisor).map(Money::from_decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(MONEY_DP))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(MONEY_DP))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(MONEY_DP);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(MONEY_DP))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(MONEY_DP))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// rate type for interest rates and loadings, stored as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.068 for 6.8%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from fractional percentage (e.g., dec!(6.8) for 6.8%)
    pub fn from_percentage_decimal(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_percentage() {
        let price = Money::from_major(200_000_000);
        assert_eq!(price.checked_percentage(dec!(20)), Some(Money::from_major(40_000_000)));
        assert_eq!(price.checked_percentage(dec!(0)), Some(Money::ZERO));
        assert_eq!(price.checked_percentage(dec!(12.5)), Some(Money::from_major(25_000_000)));
    }

    #[test]
    fn test_apply_rate() {
        let price = Money::from_major(200_000_000);
        let insurance = Rate::from_percentage_decimal(dec!(2.5));
        assert_eq!(price.checked_apply_rate(insurance), Some(Money::from_major(5_000_000)));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(max.checked_percentage(dec!(20)), None);
        assert_eq!(max.checked_add(Money::from_major(1)), None);
        assert_eq!(Money::from_major(1).checked_div(Decimal::ZERO), None);
        assert_eq!(
            Money::from_major(10).checked_div(dec!(4)),
            Some(Money::from_str_exact("2.5").unwrap())
        );
    }

    #[test]
    fn test_rounding_modes() {
        let m = Money::from_str_exact("2.5").unwrap();
        assert_eq!(m.round_dp(0), Money::from_major(2)); // banker's
        assert_eq!(m.round_half_up(0), Money::from_major(3));

        let neg = Money::from_str_exact("-2.5").unwrap();
        assert_eq!(neg.round_half_up(0), Money::from_major(-3));
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_major(-1).is_negative());
        assert!(Money::from_major(1).is_positive());
    }

    #[test]
    fn test_rate_representations() {
        let rate = Rate::from_percentage_decimal(dec!(6.8));
        assert_eq!(rate.as_decimal(), dec!(0.068));
        assert_eq!(rate.as_percentage(), dec!(6.8));
        assert_eq!(rate.to_string(), "6.8%");
        assert_eq!(
            Rate::from_percentage_decimal(dec!(12)).monthly_rate().as_decimal(),
            dec!(0.01)
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = (1..=4).map(|i| Money::from_major(i)).sum();
        assert_eq!(total, Money::from_major(10));
    }
}
