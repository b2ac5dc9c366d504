/// custom configuration - rate card and fees from json settings
use dealer_credit_rs::chrono::NaiveDate;
use dealer_credit_rs::{CreditEstimator, Decimal, EstimatorConfig, InstallmentSchedule, Money};

const SETTINGS: &str = r#"{
    "rate_table": {
        "tiers": [
            { "max_tenor_months": 12, "annual_rate": "0.029" },
            { "max_tenor_months": 36, "annual_rate": "0.045" }
        ],
        "fallback_rate": "0.065"
    },
    "admin_fee": "1500000",
    "tenor_options": [12, 24, 36]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EstimatorConfig::from_json_str(SETTINGS)?;
    let estimator = CreditEstimator::new(config)?;

    let result = estimator.quote(Money::from_major(180_000_000), Decimal::from(30), 24)?;
    println!("{}", estimator.view(&result).json());

    let first_due = NaiveDate::from_ymd_opt(2025, 1, 31).ok_or("bad date")?;
    let schedule = InstallmentSchedule::generate(&result, 24, first_due)?;
    for inst in schedule.installments.iter().take(3) {
        println!(
            "#{:<2} {} {}",
            inst.number,
            inst.due_date,
            estimator.format_currency(inst.installment)
        );
    }
    println!("...");
    println!("total paid {}", estimator.format_currency(schedule.total_paid));

    Ok(())
}
