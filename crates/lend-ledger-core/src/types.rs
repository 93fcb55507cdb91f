use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LendingError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed in percent (3 = 3%), the way lenders quote them.
/// The period a rate covers depends on the loan's `InterestType`.
pub type Rate = Decimal;

/// Settlement convention: every month counts as 30 days.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

/// Months in a year, for annual-to-monthly rate conversion.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Round to the nearest whole currency unit, half away from zero.
///
/// Applied to every displayed figure rather than carrying exact
/// fractions, so totals may drift from sums of rounded parts by a few
/// units over a long schedule.
pub fn round_money(amount: Decimal) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Interest convention a loan's quoted rate falls under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestType {
    /// Interest charged on the original principal every month.
    #[default]
    MonthlyFlat,
    /// Bank-style EMI on the declining balance.
    MonthlyReducing,
    /// Flat interest quoted per annum.
    YearlyFlat,
    /// Interest quoted per day, settled on 30-day months.
    Daily,
}

impl FromStr for InterestType {
    type Err = LendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONTHLY_FLAT" => Ok(Self::MonthlyFlat),
            "MONTHLY_REDUCING" => Ok(Self::MonthlyReducing),
            "YEARLY_FLAT" => Ok(Self::YearlyFlat),
            "DAILY" => Ok(Self::Daily),
            other => Err(LendingError::InvalidInput {
                field: "interest_type".into(),
                reason: format!("Unrecognized interest type '{other}'."),
            }),
        }
    }
}

impl std::fmt::Display for InterestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestType::MonthlyFlat => write!(f, "MONTHLY_FLAT"),
            InterestType::MonthlyReducing => write!(f, "MONTHLY_REDUCING"),
            InterestType::YearlyFlat => write!(f, "YEARLY_FLAT"),
            InterestType::Daily => write!(f, "DAILY"),
        }
    }
}

/// Risk bucket derived from a 0-100 delinquency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "LOW"),
            RiskCategory::Medium => write!(f, "MEDIUM"),
            RiskCategory::High => write!(f, "HIGH"),
            RiskCategory::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Operational standing of a borrower on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowerStatus {
    Active,
    Delay,
    DefaultRisk,
    Blacklisted,
    Inactive,
}

impl std::fmt::Display for BorrowerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorrowerStatus::Active => write!(f, "ACTIVE"),
            BorrowerStatus::Delay => write!(f, "DELAY"),
            BorrowerStatus::DefaultRisk => write!(f, "DEFAULT_RISK"),
            BorrowerStatus::Blacklisted => write!(f, "BLACKLISTED"),
            BorrowerStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// How a payment was received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    #[default]
    Cash,
    Upi,
    BankTransfer,
    Cheque,
    NeftRtgs,
    Other,
}
