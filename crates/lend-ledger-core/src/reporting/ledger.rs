//! Ledger views over recorded loans and payments.
//!
//! The store hands these functions plain record slices; filtering and
//! totalling happen here, so every report is reproducible from the same
//! data regardless of where it is persisted.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LendingError;
use crate::types::{Money, PaymentMode};
use crate::LendingResult;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A recorded payment joined with its loan and borrower identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub receipt_number: String,
    pub loan_number: String,
    pub borrower_name: String,
    pub payment_date: NaiveDate,
    pub amount: Money,
    #[serde(default)]
    pub principal_portion: Money,
    #[serde(default)]
    pub interest_portion: Money,
    #[serde(default)]
    pub penalty_portion: Money,
    #[serde(default)]
    pub mode: PaymentMode,
}

/// A loan as the ledger sees it: identity, size, booking date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_number: String,
    pub principal_amount: Money,
    pub start_date: NaiveDate,
}

/// Collections for one calendar month, newest payment first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLedger {
    pub year: i32,
    pub month: u32,
    pub total_collected: Money,
    pub principal_recovered: Money,
    pub interest_earned: Money,
    pub payments: Vec<PaymentRecord>,
}

/// Lending and collection totals for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub lent: Money,
    pub collected: Money,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Collections report for one calendar month.
pub fn monthly_ledger(
    payments: &[PaymentRecord],
    year: i32,
    month: u32,
) -> LendingResult<MonthlyLedger> {
    if !(1..=12).contains(&month) {
        return Err(LendingError::InvalidInput {
            field: "month".into(),
            reason: "Month must be between 1 and 12.".into(),
        });
    }

    let mut rows: Vec<PaymentRecord> = payments
        .iter()
        .filter(|p| p.payment_date.year() == year && p.payment_date.month() == month)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));

    let mut total_collected = Decimal::ZERO;
    let mut principal_recovered = Decimal::ZERO;
    let mut interest_earned = Decimal::ZERO;
    for payment in &rows {
        total_collected += payment.amount;
        principal_recovered += payment.principal_portion;
        interest_earned += payment.interest_portion;
    }

    Ok(MonthlyLedger {
        year,
        month,
        total_collected,
        principal_recovered,
        interest_earned,
        payments: rows,
    })
}

/// Per-day lent vs collected totals for the `window_days` ending at
/// `as_of`, oldest day first.
pub fn daily_activity(
    loans: &[LoanRecord],
    payments: &[PaymentRecord],
    window_days: u32,
    as_of: NaiveDate,
) -> LendingResult<Vec<DailyActivity>> {
    if window_days == 0 {
        return Err(LendingError::InvalidInput {
            field: "window_days".into(),
            reason: "Window must cover at least one day.".into(),
        });
    }

    let mut series = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days).rev() {
        let date = as_of
            .checked_sub_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                LendingError::DateError("Activity window precedes the calendar".into())
            })?;
        let lent: Money = loans
            .iter()
            .filter(|l| l.start_date == date)
            .map(|l| l.principal_amount)
            .sum();
        let collected: Money = payments
            .iter()
            .filter(|p| p.payment_date == date)
            .map(|p| p.amount)
            .sum();
        series.push(DailyActivity {
            date,
            lent,
            collected,
        });
    }

    Ok(series)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(receipt: &str, on: NaiveDate, amount: Decimal, principal: Decimal) -> PaymentRecord {
        PaymentRecord {
            receipt_number: receipt.to_string(),
            loan_number: "LN-2025-001".to_string(),
            borrower_name: "R. Sharma".to_string(),
            payment_date: on,
            amount,
            principal_portion: principal,
            interest_portion: amount - principal,
            penalty_portion: Decimal::ZERO,
            mode: PaymentMode::Cash,
        }
    }

    fn sample_payments() -> Vec<PaymentRecord> {
        vec![
            payment("RCP-2025-001", date(2025, 3, 5), dec!(5000), dec!(3000)),
            payment("RCP-2025-002", date(2025, 3, 20), dec!(4500), dec!(2500)),
            payment("RCP-2025-003", date(2025, 4, 2), dec!(5000), dec!(3200)),
        ]
    }

    #[test]
    fn test_monthly_ledger_filters_and_totals() {
        let ledger = monthly_ledger(&sample_payments(), 2025, 3).unwrap();

        assert_eq!(ledger.payments.len(), 2);
        assert_eq!(ledger.total_collected, dec!(9500));
        assert_eq!(ledger.principal_recovered, dec!(5500));
        assert_eq!(ledger.interest_earned, dec!(4000));
        // Newest first.
        assert_eq!(ledger.payments[0].receipt_number, "RCP-2025-002");
        assert_eq!(ledger.payments[1].receipt_number, "RCP-2025-001");
    }

    #[test]
    fn test_monthly_ledger_empty_month() {
        let ledger = monthly_ledger(&sample_payments(), 2025, 6).unwrap();
        assert!(ledger.payments.is_empty());
        assert_eq!(ledger.total_collected, dec!(0));
    }

    #[test]
    fn test_monthly_ledger_rejects_bad_month() {
        for month in [0u32, 13] {
            let err = monthly_ledger(&sample_payments(), 2025, month).unwrap_err();
            assert!(matches!(err, LendingError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_daily_activity_series() {
        let loans = vec![
            LoanRecord {
                loan_number: "LN-2025-004".to_string(),
                principal_amount: dec!(25000),
                start_date: date(2025, 4, 1),
            },
            LoanRecord {
                loan_number: "LN-2025-005".to_string(),
                principal_amount: dec!(60000),
                start_date: date(2025, 4, 2),
            },
        ];

        let series = daily_activity(&loans, &sample_payments(), 3, date(2025, 4, 2)).unwrap();

        assert_eq!(
            series,
            vec![
                DailyActivity {
                    date: date(2025, 3, 31),
                    lent: dec!(0),
                    collected: dec!(0),
                },
                DailyActivity {
                    date: date(2025, 4, 1),
                    lent: dec!(25000),
                    collected: dec!(0),
                },
                DailyActivity {
                    date: date(2025, 4, 2),
                    lent: dec!(60000),
                    collected: dec!(5000),
                },
            ]
        );
    }

    #[test]
    fn test_daily_activity_rejects_empty_window() {
        let err = daily_activity(&[], &[], 0, date(2025, 4, 2)).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { .. }));
    }
}
