//! Credit quote CLI.
//!
//! ```bash
//! credit-quote --price 200000000 --dp 20 --tenor 60
//! credit-quote --price 200000000 --dp 20 --compare
//! credit-quote --price 200000000 --dp 20 --tenor 36 --schedule --start 2025-01-05
//! credit-quote --price 200000000 --dp 20 --tenor 60 --format json --config dealer.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::info;

use dealer_credit_rs::{
    CreditEstimator, CreditQuoteResult, Decimal, EstimatorConfig, InstallmentSchedule, Money,
    QuoteView,
};

/// Simulate flat-rate vehicle credit
#[derive(Parser, Debug)]
#[command(name = "credit-quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vehicle price in whole currency units
    #[arg(short, long)]
    price: Money,

    /// Down payment as a percentage of price
    #[arg(short, long, default_value = "20")]
    dp: Decimal,

    /// Loan tenor in months
    #[arg(short, long, default_value_t = 36)]
    tenor: u32,

    /// JSON configuration file (rate table, fees, currency)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote every configured tenor instead of a single one
    #[arg(long, conflicts_with = "schedule")]
    compare: bool,

    /// Print the month-by-month installment schedule
    #[arg(long)]
    schedule: bool,

    /// First installment due date (YYYY-MM-DD). Defaults to one month from today.
    #[arg(long, requires = "schedule")]
    start: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            EstimatorConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => EstimatorConfig::default(),
    };
    let estimator = CreditEstimator::new(config).context("invalid estimator configuration")?;

    if cli.compare {
        return print_comparison(&estimator, &cli);
    }

    let result = estimator
        .quote(cli.price, cli.dp, cli.tenor)
        .context("cannot compute quote")?;

    if cli.schedule {
        let first_due = match cli.start {
            Some(date) => date,
            None => default_first_due()?,
        };
        let schedule = InstallmentSchedule::generate(&result, cli.tenor, first_due)?;
        return print_schedule(&estimator, &schedule, cli.format);
    }

    print_quote(&estimator, &cli, &result)
}

fn default_first_due() -> Result<NaiveDate> {
    Local::now()
        .date_naive()
        .checked_add_months(chrono::Months::new(1))
        .context("cannot derive default first due date")
}

fn print_quote(estimator: &CreditEstimator, cli: &Cli, result: &CreditQuoteResult) -> Result<()> {
    let view = estimator.view(result);
    match cli.format {
        OutputFormat::Json => println!("{}", view.json()),
        OutputFormat::Text => {
            println!(
                "Price {} | DP {}% | {} months",
                estimator.format_currency(cli.price),
                cli.dp,
                cli.tenor
            );
            print_view(&view);
        }
    }
    Ok(())
}

fn print_view(view: &QuoteView) {
    println!("  {:<22} {}", "Interest rate (flat)", view.interest_rate);
    println!("  {:<22} {}", "Down payment", view.down_payment_amount);
    println!("  {:<22} {}", "Financed principal", view.financed_principal);
    println!("  {:<22} {}", "Total interest", view.total_interest);
    println!("  {:<22} {}", "Total loan", view.total_loan_payable);
    println!("  {:<22} {}", "Monthly installment", view.monthly_installment);
    println!("  {:<22} {}", "Total initial payment", view.total_initial_payment);
}

fn print_comparison(estimator: &CreditEstimator, cli: &Cli) -> Result<()> {
    let rows = estimator
        .compare_tenors(cli.price, cli.dp)
        .context("cannot compute tenor comparison")?;

    match cli.format {
        OutputFormat::Json => {
            let views: Vec<_> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "tenor_months": row.tenor_months,
                        "quote": estimator.view(&row.result),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Text => {
            println!(
                "Price {} | DP {}%",
                estimator.format_currency(cli.price),
                cli.dp
            );
            println!("{:>6} {:>6} {:>18} {:>18}", "Tenor", "Rate", "Monthly", "TDP");
            for row in &rows {
                println!(
                    "{:>6} {:>6} {:>18} {:>18}",
                    row.tenor_months,
                    row.result.interest_rate.to_string(),
                    estimator.format_currency(row.result.monthly_installment),
                    estimator.format_currency(row.result.total_initial_payment),
                );
            }
        }
    }
    Ok(())
}

fn print_schedule(
    estimator: &CreditEstimator,
    schedule: &InstallmentSchedule,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(schedule)?),
        OutputFormat::Text => {
            println!(
                "{:>4} {:>12} {:>18} {:>16} {:>18} {:>18}",
                "No", "Due", "Principal", "Interest", "Installment", "Balance"
            );
            for inst in &schedule.installments {
                println!(
                    "{:>4} {:>12} {:>18} {:>16} {:>18} {:>18}",
                    inst.number,
                    inst.due_date.to_string(),
                    estimator.format_currency(inst.principal_portion),
                    estimator.format_currency(inst.interest_portion),
                    estimator.format_currency(inst.installment),
                    estimator.format_currency(inst.remaining_balance),
                );
            }
            println!("Total paid {}", estimator.format_currency(schedule.total_paid));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_selects_output() {
        let cli = Cli::try_parse_from(["credit-quote", "--price", "200000000", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["credit-quote", "--price", "200000000"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.tenor, 36);

        // there is no bare --json switch
        assert!(Cli::try_parse_from(["credit-quote", "--price", "1", "--json"]).is_err());
    }
}
