use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_ledger_core::allocation::{accrued_interest, allocate_payment, AllocationInput};

use crate::input;

/// Arguments for payment allocation
#[derive(Args)]
pub struct AllocateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Payment amount received
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Outstanding principal on the loan
    #[arg(long)]
    pub principal_pending: Option<Decimal>,

    /// Accrued unpaid interest
    #[arg(long)]
    pub interest_pending: Option<Decimal>,

    /// Outstanding penalties
    #[arg(long, default_value = "0")]
    pub penalty_pending: Decimal,
}

pub fn run_allocate(args: AllocateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let allocation_input: AllocationInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AllocationInput {
            payment_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            principal_pending: args
                .principal_pending
                .ok_or("--principal-pending is required (or provide --input)")?,
            interest_pending: args
                .interest_pending
                .ok_or("--interest-pending is required (or provide --input)")?,
            penalty_pending: args.penalty_pending,
        }
    };

    let result = allocate_payment(&allocation_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for accrued-interest estimation
#[derive(Args)]
pub struct AccruedInterestArgs {
    /// Outstanding principal
    #[arg(long)]
    pub principal: Decimal,

    /// Monthly interest rate in percent
    #[arg(long)]
    pub monthly_rate: Decimal,

    /// Accrual start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: NaiveDate,

    /// Accrue up to this date (YYYY-MM-DD)
    #[arg(long)]
    pub till_date: NaiveDate,
}

pub fn run_accrued_interest(args: AccruedInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let amount = accrued_interest(
        args.principal,
        args.monthly_rate,
        args.start_date,
        args.till_date,
    )?;
    Ok(serde_json::json!({ "accrued_interest": amount }))
}
