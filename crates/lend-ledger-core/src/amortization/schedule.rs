//! Loan amortization: commercial terms in, installment schedule and
//! aggregate totals out.
//!
//! Four interest conventions:
//! 1. **Monthly flat** -- interest on the original principal every month.
//! 2. **Monthly reducing** -- bank-style EMI on the declining balance.
//! 3. **Yearly flat** -- flat interest quoted per annum.
//! 4. **Daily** -- per-day interest, 30-day month convention.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::types::{round_money, InterestType, Money, Rate, DAYS_PER_MONTH, MONTHS_PER_YEAR};
use crate::LendingResult;

const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Commercial terms of a loan at origination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount handed to the borrower.
    pub principal_amount: Money,
    /// Quoted rate in percent; the period it covers depends on `interest_type`.
    pub interest_rate: Rate,
    #[serde(default)]
    pub interest_type: InterestType,
    /// Tenure in months.
    pub duration_months: u32,
}

/// Aggregate figures plus the full installment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Interest falling due each month. For the reducing method this is the
    /// average over the tenure, not the first month's charge.
    pub monthly_interest: Money,
    pub total_interest: Money,
    pub total_receivable: Money,
    pub emi_amount: Money,
    pub schedule: Vec<ScheduleEntry>,
}

/// One row of the repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub installment_no: u32,
    pub due_date: NaiveDate,
    pub emi_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// Principal balance remaining once this installment is paid.
    pub balance_after: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Calculate totals and the repayment schedule for a loan.
///
/// Due dates fall `installment_no` months after `origination`; the caller
/// supplies the origination date, so results are reproducible.
pub fn calculate_loan(
    terms: &LoanTerms,
    origination: NaiveDate,
) -> LendingResult<CalculationResult> {
    validate_terms(terms)?;

    match terms.interest_type {
        InterestType::MonthlyFlat => monthly_flat(terms, origination),
        InterestType::MonthlyReducing => monthly_reducing(terms, origination),
        InterestType::YearlyFlat => yearly_flat(terms, origination),
        InterestType::Daily => daily(terms, origination),
    }
}

fn validate_terms(terms: &LoanTerms) -> LendingResult<()> {
    if terms.duration_months == 0 {
        return Err(LendingError::InvalidInput {
            field: "duration_months".into(),
            reason: "Duration must be at least one month.".into(),
        });
    }
    if terms.principal_amount < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "principal_amount".into(),
            reason: "Principal cannot be negative.".into(),
        });
    }
    if terms.interest_rate < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Flat conventions
// ---------------------------------------------------------------------------

/// Monthly flat: interest computed once on the original principal and
/// charged unchanged every month, regardless of the declining balance.
fn monthly_flat(terms: &LoanTerms, origination: NaiveDate) -> LendingResult<CalculationResult> {
    let months = Decimal::from(terms.duration_months);
    let monthly_interest = terms.principal_amount * (terms.interest_rate / PERCENT);
    let total_interest = monthly_interest * months;
    let total_receivable = terms.principal_amount + total_interest;
    let emi = total_receivable / months;

    Ok(CalculationResult {
        monthly_interest: round_money(monthly_interest),
        total_interest: round_money(total_interest),
        total_receivable: round_money(total_receivable),
        emi_amount: round_money(emi),
        schedule: equal_principal_schedule(
            terms.principal_amount,
            terms.duration_months,
            emi,
            monthly_interest,
            origination,
        )?,
    })
}

/// Yearly flat: same shape as monthly flat, rate quoted per annum.
fn yearly_flat(terms: &LoanTerms, origination: NaiveDate) -> LendingResult<CalculationResult> {
    let months = Decimal::from(terms.duration_months);
    let years = months / MONTHS_PER_YEAR;
    let total_interest = terms.principal_amount * (terms.interest_rate / PERCENT) * years;
    let monthly_interest = total_interest / months;
    let total_receivable = terms.principal_amount + total_interest;
    let emi = total_receivable / months;

    Ok(CalculationResult {
        monthly_interest: round_money(monthly_interest),
        total_interest: round_money(total_interest),
        total_receivable: round_money(total_receivable),
        emi_amount: round_money(emi),
        schedule: equal_principal_schedule(
            terms.principal_amount,
            terms.duration_months,
            emi,
            monthly_interest,
            origination,
        )?,
    })
}

/// Daily: rate quoted per day, accrued over 30-day months.
fn daily(terms: &LoanTerms, origination: NaiveDate) -> LendingResult<CalculationResult> {
    let months = Decimal::from(terms.duration_months);
    let days = months * DAYS_PER_MONTH;
    let daily_interest = terms.principal_amount * (terms.interest_rate / PERCENT);
    let total_interest = daily_interest * days;
    let monthly_interest = daily_interest * DAYS_PER_MONTH;
    let total_receivable = terms.principal_amount + total_interest;
    let emi = total_receivable / months;

    Ok(CalculationResult {
        monthly_interest: round_money(monthly_interest),
        total_interest: round_money(total_interest),
        total_receivable: round_money(total_receivable),
        emi_amount: round_money(emi),
        schedule: equal_principal_schedule(
            terms.principal_amount,
            terms.duration_months,
            emi,
            monthly_interest,
            origination,
        )?,
    })
}

/// Schedule shape shared by the flat conventions: principal amortizes in
/// equal parts while the interest portion stays constant.
fn equal_principal_schedule(
    principal: Money,
    months: u32,
    emi: Money,
    interest_per_month: Money,
    origination: NaiveDate,
) -> LendingResult<Vec<ScheduleEntry>> {
    let principal_per_month = principal / Decimal::from(months);
    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for no in 1..=months {
        balance -= principal_per_month;
        schedule.push(ScheduleEntry {
            installment_no: no,
            due_date: due_date(origination, no)?,
            emi_amount: round_money(emi),
            principal_portion: round_money(principal_per_month),
            interest_portion: round_money(interest_per_month),
            balance_after: round_money(balance),
        });
    }

    Ok(schedule)
}

// ---------------------------------------------------------------------------
// Reducing balance
// ---------------------------------------------------------------------------

/// Reducing balance: EMI = P·r·(1+r)^N / ((1+r)^N − 1), interest recomputed
/// each month on the remaining principal.
fn monthly_reducing(terms: &LoanTerms, origination: NaiveDate) -> LendingResult<CalculationResult> {
    let months = terms.duration_months;
    let r = terms.interest_rate / PERCENT;

    // The EMI closed form has no zero-rate limit; amortize evenly instead.
    if r.is_zero() {
        let emi = terms.principal_amount / Decimal::from(months);
        return Ok(CalculationResult {
            monthly_interest: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_receivable: round_money(terms.principal_amount),
            emi_amount: round_money(emi),
            schedule: equal_principal_schedule(
                terms.principal_amount,
                months,
                emi,
                Decimal::ZERO,
                origination,
            )?,
        });
    }

    let growth = (Decimal::ONE + r).powi(i64::from(months));
    let annuity_denominator = growth - Decimal::ONE;
    if annuity_denominator.is_zero() {
        return Err(LendingError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }
    let emi = terms.principal_amount * r * growth / annuity_denominator;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = terms.principal_amount;
    let mut total_interest = Decimal::ZERO;

    for no in 1..=months {
        let interest_portion = balance * r;
        let principal_portion = emi - interest_portion;
        balance = (balance - principal_portion).max(Decimal::ZERO);
        total_interest += interest_portion;

        schedule.push(ScheduleEntry {
            installment_no: no,
            due_date: due_date(origination, no)?,
            emi_amount: round_money(emi),
            principal_portion: round_money(principal_portion),
            interest_portion: round_money(interest_portion),
            balance_after: round_money(balance),
        });
    }

    // Total is the accumulated per-month interest, not a closed form, so it
    // carries the same rounding drift the schedule itself shows.
    Ok(CalculationResult {
        monthly_interest: round_money(total_interest / Decimal::from(months)),
        total_interest: round_money(total_interest),
        total_receivable: round_money(terms.principal_amount + total_interest),
        emi_amount: round_money(emi),
        schedule,
    })
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Installment `no` falls due `no` calendar months after origination,
/// clamped to month end (Jan 31 + 1 month = Feb 28).
fn due_date(origination: NaiveDate, no: u32) -> LendingResult<NaiveDate> {
    origination
        .checked_add_months(Months::new(no))
        .ok_or_else(|| {
            LendingError::DateError(format!("Due date overflows the calendar at installment {no}"))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
