use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_ledger_core::amortization::{calculate_loan, LoanTerms};
use lend_ledger_core::validation::validate_loan_application;

use crate::input;

/// Arguments for loan amortization
#[derive(Args)]
pub struct AmortizeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount lent
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Interest rate in percent; the period depends on --interest-type
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// MONTHLY_FLAT, MONTHLY_REDUCING, YEARLY_FLAT or DAILY
    #[arg(long, default_value = "MONTHLY_FLAT")]
    pub interest_type: String,

    /// Tenure in months
    #[arg(long)]
    pub duration: Option<u32>,

    /// Origination date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Enforce the lending-policy bounds before calculating
    #[arg(long)]
    pub check_policy: bool,
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal_amount: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            interest_type: args.interest_type.parse()?,
            duration_months: args
                .duration
                .ok_or("--duration is required (or provide --input)")?,
        }
    };

    if args.check_policy {
        validate_loan_application(&terms)?;
    }

    let origination = match args.start_date {
        Some(date) => date,
        None => Local::now().date_naive(),
    };

    let result = calculate_loan(&terms, origination)?;
    Ok(serde_json::to_value(result)?)
}
