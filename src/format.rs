//! presentation helpers: currency strings and a display view of a quote
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::CreditQuoteResult;

/// locale convention for rendering whole-unit currency amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 code
    pub code: String,
    pub symbol: String,
    pub grouping_separator: char,
    /// text between symbol and digits
    pub symbol_spacing: String,
}

impl CurrencyFormat {
    /// Indonesian rupiah, id-ID conventions
    pub fn idr() -> Self {
        Self {
            code: "IDR".to_string(),
            symbol: "Rp".to_string(),
            grouping_separator: '.',
            symbol_spacing: " ".to_string(),
        }
    }

    /// US dollar, en-US conventions
    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            grouping_separator: ',',
            symbol_spacing: String::new(),
        }
    }

    /// render with zero fractional digits
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.round_half_up(0).as_decimal();
        let digits = group_digits(&rounded.abs().trunc().to_string(), self.grouping_separator);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };

        format!("{}{}{}{}", sign, self.symbol, self.symbol_spacing, digits)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::idr()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// serializable, display-ready view of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteView {
    pub interest_rate: String,
    pub down_payment_amount: String,
    pub financed_principal: String,
    pub total_interest: String,
    pub total_loan_payable: String,
    pub monthly_installment: String,
    pub total_initial_payment: String,
}

impl QuoteView {
    pub fn from_result(result: &CreditQuoteResult, format: &CurrencyFormat) -> Self {
        QuoteView {
            interest_rate: result.interest_rate.to_string(),
            down_payment_amount: format.format(result.down_payment_amount),
            financed_principal: format.format(result.financed_principal),
            total_interest: format.format(result.total_interest),
            total_loan_payable: format.format(result.total_loan_payable),
            monthly_installment: format.format(result.monthly_installment),
            total_initial_payment: format.format(result.total_initial_payment),
        }
    }

    /// pretty-printed json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
