use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CreditError, Result};
use crate::format::CurrencyFormat;
use crate::interest::RateTable;

/// estimator configuration, as stored in the site settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub rate_table: RateTable,
    /// insurance loading charged on the vehicle price at signing
    pub insurance_rate: Rate,
    /// fixed administrative fee charged at signing
    pub admin_fee: Money,
    pub currency: CurrencyFormat,
    /// tenors offered for comparison, in months
    pub tenor_options: Vec<u32>,
    /// down payment percentages offered for comparison
    pub down_payment_options: Vec<Decimal>,
}

impl EstimatorConfig {
    /// dealership defaults: rupiah pricing, 2.5% insurance, Rp 2.5m admin fee
    pub fn dealership_default() -> Self {
        Self {
            rate_table: RateTable::dealership_default(),
            insurance_rate: Rate::from_percentage_decimal(dec!(2.5)),
            admin_fee: Money::from_major(2_500_000),
            currency: CurrencyFormat::idr(),
            tenor_options: vec![12, 24, 36, 48, 60],
            down_payment_options: vec![dec!(10), dec!(15), dec!(20), dec!(25), dec!(30), dec!(40), dec!(50)],
        }
    }

    /// parse and validate a json document; omitted fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EstimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// load from a json file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CreditError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.rate_table.validate()?;

        if self.insurance_rate.is_negative() || self.insurance_rate.as_decimal() > Decimal::ONE {
            return Err(CreditError::config(format!(
                "insurance rate {} outside 0%..=100%",
                self.insurance_rate
            )));
        }

        if self.admin_fee.is_negative() {
            return Err(CreditError::config(format!(
                "admin fee {} is negative",
                self.admin_fee
            )));
        }

        if self.tenor_options.is_empty() {
            return Err(CreditError::config("no tenor options configured"));
        }

        if self.tenor_options.contains(&0) {
            return Err(CreditError::config("tenor options must be at least one month"));
        }

        if let Some(dp) = self
            .down_payment_options
            .iter()
            .find(|dp| **dp < Decimal::ZERO || **dp > Decimal::ONE_HUNDRED)
        {
            return Err(CreditError::config(format!(
                "down payment option {}% outside 0..=100",
                dp
            )));
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::dealership_default()
    }
}
