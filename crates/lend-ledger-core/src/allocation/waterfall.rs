//! Payment waterfall: penalty first, then interest, then principal.
//!
//! Standard receivables practice -- penalties and accrued interest are
//! extinguished before the principal comes down. Whatever survives all
//! three buckets is reported as excess for the caller to dispose of
//! (wallet credit, refund; not this engine's business).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::types::{round_money, Money};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// A payment against a loan's outstanding balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationInput {
    pub payment_amount: Money,
    /// Outstanding principal on the loan.
    pub principal_pending: Money,
    /// Accrued, unpaid interest.
    pub interest_pending: Money,
    /// Outstanding penalties, if any.
    #[serde(default)]
    pub penalty_pending: Money,
}

/// How a payment splits across the waterfall buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub penalty_portion: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub excess_amount: Money,
    pub new_principal_pending: Money,
    pub new_interest_pending: Money,
    pub is_loan_closed: bool,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Split a payment across penalty, interest and principal, in that order.
///
/// Amounts are settled in whole currency units, so the four portions always
/// sum to the rounded payment. The loan is closed when nothing remains
/// pending on either principal or interest.
pub fn allocate_payment(input: &AllocationInput) -> LendingResult<AllocationResult> {
    validate_allocation_input(input)?;

    let mut remaining = round_money(input.payment_amount);
    let principal_pending = round_money(input.principal_pending);
    let interest_pending = round_money(input.interest_pending);
    let penalty_pending = round_money(input.penalty_pending);

    let penalty_portion = remaining.min(penalty_pending);
    remaining -= penalty_portion;

    let interest_portion = remaining.min(interest_pending);
    remaining -= interest_portion;

    let principal_portion = remaining.min(principal_pending);
    remaining -= principal_portion;

    let new_principal_pending = principal_pending - principal_portion;
    let new_interest_pending = interest_pending - interest_portion;

    Ok(AllocationResult {
        penalty_portion,
        interest_portion,
        principal_portion,
        excess_amount: remaining,
        new_principal_pending,
        new_interest_pending,
        is_loan_closed: new_principal_pending.is_zero() && new_interest_pending.is_zero(),
    })
}

fn validate_allocation_input(input: &AllocationInput) -> LendingResult<()> {
    if input.payment_amount <= Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "payment_amount".into(),
            reason: "Payment amount must be positive.".into(),
        });
    }
    for (field, value) in [
        ("principal_pending", input.principal_pending),
        ("interest_pending", input.interest_pending),
        ("penalty_pending", input.penalty_pending),
    ] {
        if value < Decimal::ZERO {
            return Err(LendingError::InvalidInput {
                field: field.into(),
                reason: "Pending balances cannot be negative.".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
