use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_ledger_core::risk::{borrower_status, calculate_risk_score, BorrowerHistory, RiskInput};

use crate::input;

/// Arguments for risk scoring
#[derive(Args)]
pub struct RiskScoreArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// EMIs missed so far
    #[arg(long)]
    pub missed_payments: Option<u32>,

    /// Cumulative days late across installments
    #[arg(long, default_value_t = 0)]
    pub delay_days: u32,

    /// Outstanding loan amount
    #[arg(long, default_value = "0")]
    pub loan_amount: Decimal,

    /// Percent of the receivable collected so far
    #[arg(long, default_value = "0")]
    pub paid_percentage: Decimal,

    /// Borrower's past loan count
    #[arg(long, default_value_t = 0)]
    pub total_loans: u32,

    /// Past loans closed on time
    #[arg(long, default_value_t = 0)]
    pub closed_on_time: u32,

    /// Past loans that defaulted
    #[arg(long, default_value_t = 0)]
    pub defaulted: u32,
}

pub fn run_risk_score(args: RiskScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let risk_input: RiskInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RiskInput {
            missed_payments: args
                .missed_payments
                .ok_or("--missed-payments is required (or provide --input)")?,
            total_delay_days: args.delay_days,
            loan_amount: args.loan_amount,
            paid_percentage: args.paid_percentage,
            borrower_history: BorrowerHistory {
                total_loans: args.total_loans,
                closed_on_time: args.closed_on_time,
                defaulted: args.defaulted,
            },
        }
    };

    let result = calculate_risk_score(&risk_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for borrower status lookup
#[derive(Args)]
pub struct BorrowerStatusArgs {
    /// EMIs missed so far
    #[arg(long)]
    pub missed_payments: u32,
}

pub fn run_borrower_status(args: BorrowerStatusArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let status = borrower_status(args.missed_payments);
    Ok(serde_json::json!({ "status": status }))
}
