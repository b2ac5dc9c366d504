use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CreditError, Result};
use crate::interest::FlatInterestEngine;
use crate::types::CreditQuoteResult;

/// longest plan a schedule is generated for (100 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// one month of a flat installment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInstallment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub installment: Money,
    /// financed principal still outstanding after this installment
    pub remaining_balance: Money,
}

/// month-by-month breakdown of a flat-rate quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub tenor_months: u32,
    pub installments: Vec<ScheduledInstallment>,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl InstallmentSchedule {
    /// split a quote into equal monthly portions, first one due on `first_due`
    ///
    /// `tenor_months` must be the tenor the quote was computed for.
    pub fn generate(
        quote: &CreditQuoteResult,
        tenor_months: u32,
        first_due: NaiveDate,
    ) -> Result<Self> {
        if tenor_months == 0 || tenor_months > MAX_SCHEDULE_MONTHS {
            return Err(CreditError::validation(
                "tenor_months",
                format!("schedule needs 1..={} months, got {}", MAX_SCHEDULE_MONTHS, tenor_months),
            ));
        }

        // every due date must exist before anything is allocated
        let last_due = first_due.checked_add_months(Months::new(tenor_months - 1));
        if last_due.is_none() {
            return Err(CreditError::validation(
                "first_due",
                format!("{} months from {} falls outside the calendar range", tenor_months, first_due),
            ));
        }

        let engine = FlatInterestEngine::new();
        let principal_each = engine
            .monthly_principal(quote.financed_principal, tenor_months)
            .ok_or_else(|| overflow(quote))?;
        let interest_each = engine
            .monthly_interest(quote.financed_principal, quote.interest_rate)
            .ok_or_else(|| overflow(quote))?;

        let mut installments = Vec::with_capacity(tenor_months as usize);
        let mut remaining = quote.financed_principal;
        let mut interest_left = quote.total_interest;

        for number in 1..=tenor_months {
            let due_date = first_due
                .checked_add_months(Months::new(number - 1))
                .ok_or_else(|| {
                    CreditError::validation(
                        "first_due",
                        format!("installment {} falls outside the calendar range", number),
                    )
                })?;

            // last installment absorbs rounding residue
            let (principal_portion, interest_portion) = if number == tenor_months {
                (remaining, interest_left)
            } else {
                (principal_each, interest_each)
            };

            remaining -= principal_portion;
            interest_left -= interest_portion;

            installments.push(ScheduledInstallment {
                number,
                due_date,
                principal_portion,
                interest_portion,
                installment: principal_portion + interest_portion,
                remaining_balance: remaining,
            });
        }

        let total_principal: Money = installments.iter().map(|i| i.principal_portion).sum();
        let total_interest: Money = installments.iter().map(|i| i.interest_portion).sum();

        Ok(Self {
            tenor_months,
            installments,
            total_principal,
            total_interest,
            total_paid: total_principal + total_interest,
        })
    }

    /// get installment by 1-based number
    pub fn get(&self, number: u32) -> Option<&ScheduledInstallment> {
        number
            .checked_sub(1)
            .and_then(|idx| self.installments.get(idx as usize))
    }

    /// outstanding financed principal after an installment; before the first, the full amount
    pub fn balance_after(&self, number: u32) -> Money {
        match number {
            0 => self.total_principal,
            n => self
                .get(n)
                .map(|i| i.remaining_balance)
                .unwrap_or(Money::ZERO),
        }
    }

    /// date of the final installment
    pub fn final_due_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|i| i.due_date)
    }
}

fn overflow(quote: &CreditQuoteResult) -> CreditError {
    CreditError::validation(
        "financed_principal",
        format!("{} is too large to schedule", quote.financed_principal),
    )
}
