use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::Value;

use lend_ledger_core::reporting::{daily_activity, monthly_ledger, LoanRecord, PaymentRecord};

use crate::input;

/// Arguments for the monthly collections ledger
#[derive(Args)]
pub struct MonthlyLedgerArgs {
    /// Path to a JSON file holding the payment records
    #[arg(long)]
    pub payments: String,

    /// Calendar month as YYYY-MM
    #[arg(long)]
    pub month: String,

    /// Path to a JSON file holding loan records; adds a daily
    /// lent-vs-collected series to the report
    #[arg(long)]
    pub loans: Option<String>,

    /// Days of daily activity to include alongside the ledger
    #[arg(long, default_value_t = 7)]
    pub days: u32,

    /// Anchor date for the daily series (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run_monthly_ledger(args: MonthlyLedgerArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payments: Vec<PaymentRecord> = input::read_json(&args.payments)?;
    let (year, month) = parse_month(&args.month)?;

    let ledger = monthly_ledger(&payments, year, month)?;
    let mut value = serde_json::to_value(&ledger)?;

    if let Some(ref path) = args.loans {
        let loans: Vec<LoanRecord> = input::read_json(path)?;
        let as_of = match args.as_of {
            Some(date) => date,
            None => Local::now().date_naive(),
        };
        let activity = daily_activity(&loans, &payments, args.days, as_of)?;
        value["daily_activity"] = serde_json::to_value(activity)?;
    }

    Ok(value)
}

/// Expected format: YYYY-MM.
fn parse_month(raw: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let (year, month) = raw
        .split_once('-')
        .ok_or_else(|| format!("Expected month as YYYY-MM, got '{raw}'"))?;
    Ok((year.parse()?, month.parse()?))
}
