//! Partial-period interest, for foreclosure quotes and mid-cycle payments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::LendingError;
use crate::types::{round_money, Money, Rate, DAYS_PER_MONTH};
use crate::LendingResult;

const PERCENT: Decimal = dec!(100);

/// Interest accrued on `principal` between two dates at a monthly
/// percentage rate.
///
/// The monthly rate is spread over a 30-day month and applied per whole
/// elapsed day. Callers typically feed the result into a payment
/// allocation as the loan's `interest_pending`.
pub fn accrued_interest(
    principal: Money,
    monthly_rate: Rate,
    start: NaiveDate,
    till: NaiveDate,
) -> LendingResult<Money> {
    if principal < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "principal".into(),
            reason: "Principal cannot be negative.".into(),
        });
    }
    if monthly_rate < Decimal::ZERO {
        return Err(LendingError::InvalidInput {
            field: "monthly_rate".into(),
            reason: "Rate cannot be negative.".into(),
        });
    }
    if till < start {
        return Err(LendingError::DateError(format!(
            "Accrual window ends ({till}) before it starts ({start})"
        )));
    }

    let days = Decimal::from((till - start).num_days());
    let daily_rate = monthly_rate / DAYS_PER_MONTH;
    Ok(round_money(principal * (daily_rate / PERCENT) * days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_convention_month() {
        // 3%/month on 100,000 = 0.1%/day = 100/day.
        let amount = accrued_interest(
            dec!(100000),
            dec!(3),
            date(2025, 3, 1),
            date(2025, 3, 31),
        )
        .unwrap();
        assert_eq!(amount, dec!(3000));
    }

    #[test]
    fn test_partial_window() {
        let amount = accrued_interest(
            dec!(100000),
            dec!(3),
            date(2025, 3, 1),
            date(2025, 4, 15),
        )
        .unwrap();
        // 45 days at 100/day.
        assert_eq!(amount, dec!(4500));
    }

    #[test]
    fn test_same_day_accrues_nothing() {
        let amount =
            accrued_interest(dec!(100000), dec!(3), date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(amount, dec!(0));
    }

    #[test]
    fn test_result_is_rounded() {
        // 1 day at 2%/month on 999: 999 * (2/30/100) = 0.666 -> 1.
        let amount =
            accrued_interest(dec!(999), dec!(2), date(2025, 3, 1), date(2025, 3, 2)).unwrap();
        assert_eq!(amount, dec!(1));
    }

    #[test]
    fn test_reversed_window_rejected() {
        let err =
            accrued_interest(dec!(1000), dec!(3), date(2025, 3, 2), date(2025, 3, 1)).unwrap_err();
        assert!(matches!(err, LendingError::DateError(_)));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err =
            accrued_interest(dec!(-1), dec!(3), date(2025, 3, 1), date(2025, 3, 2)).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { .. }));
        let err =
            accrued_interest(dec!(1000), dec!(-3), date(2025, 3, 1), date(2025, 3, 2)).unwrap_err();
        assert!(matches!(err, LendingError::InvalidInput { .. }));
    }
}
