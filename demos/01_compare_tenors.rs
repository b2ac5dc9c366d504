/// compare tenors and down payments for one vehicle
use dealer_credit_rs::{CreditEstimator, Decimal, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let estimator = CreditEstimator::default();
    let price = Money::from_major(315_000_000);

    println!("=== by tenor, 25% down ===\n");
    for row in estimator.compare_tenors(price, Decimal::from(25))? {
        println!(
            "{:>3} months @ {:<5} -> {} / month",
            row.tenor_months,
            row.result.interest_rate,
            estimator.format_currency(row.result.monthly_installment)
        );
    }

    println!("\n=== by down payment, 48 months ===\n");
    for row in estimator.compare_down_payments(price, 48)? {
        println!(
            "{:>3}% down (TDP {}) -> {} / month",
            row.down_payment_percent,
            estimator.format_currency(row.result.total_initial_payment),
            estimator.format_currency(row.result.monthly_installment)
        );
    }

    Ok(())
}
