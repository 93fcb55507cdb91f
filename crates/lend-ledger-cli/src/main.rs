mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::allocate::{AccruedInterestArgs, AllocateArgs};
use commands::amortize::AmortizeArgs;
use commands::ledger::MonthlyLedgerArgs;
use commands::risk::{BorrowerStatusArgs, RiskScoreArgs};

/// Private money-lending calculations
#[derive(Parser)]
#[command(
    name = "lledger",
    version,
    about = "Private money-lending calculations",
    long_about = "A CLI for the lend-ledger engine: amortization schedules for \
                  flat, reducing, yearly and daily interest loans, payment \
                  allocation across penalty, interest and principal, accrued \
                  interest, borrower risk scoring, and collection ledgers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the installment schedule and totals for a loan
    Amortize(AmortizeArgs),
    /// Split a payment across penalty, interest and principal
    Allocate(AllocateArgs),
    /// Interest accrued between two dates at a monthly rate
    AccruedInterest(AccruedInterestArgs),
    /// Score a borrower's delinquency risk
    RiskScore(RiskScoreArgs),
    /// Status bucket implied by missed payments
    BorrowerStatus(BorrowerStatusArgs),
    /// Collections ledger for one calendar month
    MonthlyLedger(MonthlyLedgerArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Amortize(args) => commands::amortize::run_amortize(args),
        Commands::Allocate(args) => commands::allocate::run_allocate(args),
        Commands::AccruedInterest(args) => commands::allocate::run_accrued_interest(args),
        Commands::RiskScore(args) => commands::risk::run_risk_score(args),
        Commands::BorrowerStatus(args) => commands::risk::run_borrower_status(args),
        Commands::MonthlyLedger(args) => commands::ledger::run_monthly_ledger(args),
        Commands::Version => {
            println!("lledger {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
