use log::{debug, warn};
use rust_decimal::Decimal;

use crate::config::EstimatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CreditError, Result};
use crate::format::QuoteView;
use crate::interest::FlatInterestEngine;
use crate::types::{CreditQuoteInput, CreditQuoteResult, TenorQuote};

/// flat-rate vehicle credit estimator
///
/// Pure and stateless apart from its configuration, so a single instance can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CreditEstimator {
    config: EstimatorConfig,
    interest: FlatInterestEngine,
}

impl CreditEstimator {
    /// create from a configuration, validating it first
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            interest: FlatInterestEngine::new(),
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// flat annual rate for a tenor; never fails
    pub fn rate_for_tenor(&self, tenor_months: u32) -> Rate {
        self.config.rate_table.rate_for(tenor_months)
    }

    /// simulate a credit purchase
    pub fn quote(
        &self,
        principal: Money,
        down_payment_percent: Decimal,
        tenor_months: u32,
    ) -> Result<CreditQuoteResult> {
        self.quote_input(&CreditQuoteInput::new(principal, down_payment_percent, tenor_months))
    }

    pub fn quote_input(&self, input: &CreditQuoteInput) -> Result<CreditQuoteResult> {
        if let Err(e) = input.validate() {
            warn!("rejected credit quote input {:?}: {}", input, e);
            return Err(e);
        }

        let rate = self.rate_for_tenor(input.tenor_months);
        let down_payment_amount = input
            .principal
            .checked_percentage(input.down_payment_percent)
            .ok_or_else(|| too_large(input))?;
        let financed_principal = input.principal - down_payment_amount;
        let total_interest = self
            .interest
            .total_interest(financed_principal, rate, input.tenor_months)
            .ok_or_else(|| too_large(input))?;
        let total_loan_payable = financed_principal
            .checked_add(total_interest)
            .ok_or_else(|| too_large(input))?;
        let monthly_installment = total_loan_payable
            .checked_div(Decimal::from(input.tenor_months))
            .ok_or_else(|| too_large(input))?;
        let total_initial_payment = input
            .principal
            .checked_apply_rate(self.config.insurance_rate)
            .and_then(|insurance| down_payment_amount.checked_add(insurance))
            .and_then(|subtotal| subtotal.checked_add(self.config.admin_fee))
            .ok_or_else(|| too_large(input))?;

        debug!(
            "quote price={} dp={}% tenor={}m rate={} monthly={} tdp={}",
            input.principal,
            input.down_payment_percent,
            input.tenor_months,
            rate,
            monthly_installment,
            total_initial_payment
        );

        Ok(CreditQuoteResult {
            interest_rate: rate,
            down_payment_amount,
            financed_principal,
            total_interest,
            total_loan_payable,
            monthly_installment,
            total_initial_payment,
        })
    }

    /// quote every configured tenor option at a fixed down payment
    pub fn compare_tenors(
        &self,
        principal: Money,
        down_payment_percent: Decimal,
    ) -> Result<Vec<TenorQuote>> {
        self.config
            .tenor_options
            .iter()
            .map(|&tenor_months| {
                let result = self.quote(principal, down_payment_percent, tenor_months)?;
                Ok(TenorQuote {
                    tenor_months,
                    down_payment_percent,
                    result,
                })
            })
            .collect()
    }

    /// quote every configured down payment option at a fixed tenor
    pub fn compare_down_payments(
        &self,
        principal: Money,
        tenor_months: u32,
    ) -> Result<Vec<TenorQuote>> {
        self.config
            .down_payment_options
            .iter()
            .map(|&down_payment_percent| {
                let result = self.quote(principal, down_payment_percent, tenor_months)?;
                Ok(TenorQuote {
                    tenor_months,
                    down_payment_percent,
                    result,
                })
            })
            .collect()
    }

    /// format an amount with the configured currency convention
    pub fn format_currency(&self, amount: Money) -> String {
        self.config.currency.format(amount)
    }

    /// display view of a quote in the configured currency
    pub fn view(&self, result: &CreditQuoteResult) -> QuoteView {
        QuoteView::from_result(result, &self.config.currency)
    }
}

fn too_large(input: &CreditQuoteInput) -> CreditError {
    warn!("credit quote overflowed for input {:?}", input);
    CreditError::validation("principal", format!("{} is too large to quote", input.principal))
}
