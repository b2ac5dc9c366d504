/// quick start - minimal example to get started
use dealer_credit_rs::{format_currency, quote, Decimal, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a Rp 200m car, 20% down, five years
    let result = quote(Money::from_major(200_000_000), Decimal::from(20), 60)?;

    println!("rate                  {}", result.interest_rate);
    println!("down payment          {}", format_currency(result.down_payment_amount));
    println!("monthly installment   {}", format_currency(result.monthly_installment));
    println!("total initial payment {}", format_currency(result.total_initial_payment));

    Ok(())
}
