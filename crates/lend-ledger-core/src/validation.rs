//! Business bounds applied where loan applications enter the system.
//!
//! The calculation engine itself only rejects nonsense (zero duration,
//! negative amounts); these are the stricter commercial limits of the
//! lending policy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::amortization::LoanTerms;
use crate::error::LendingError;
use crate::LendingResult;

pub const MIN_PRINCIPAL: Decimal = dec!(1000);
pub const MAX_PRINCIPAL: Decimal = dec!(10000000);
pub const MIN_RATE: Decimal = dec!(0.5);
pub const MAX_RATE: Decimal = dec!(36);
pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 120;

/// Validate a loan application against the lending policy.
pub fn validate_loan_application(terms: &LoanTerms) -> LendingResult<()> {
    if terms.principal_amount < MIN_PRINCIPAL {
        return Err(LendingError::InvalidInput {
            field: "principal_amount".into(),
            reason: format!("Minimum loan amount is {MIN_PRINCIPAL}."),
        });
    }
    if terms.principal_amount > MAX_PRINCIPAL {
        return Err(LendingError::InvalidInput {
            field: "principal_amount".into(),
            reason: format!("Maximum loan amount is {MAX_PRINCIPAL}."),
        });
    }
    if terms.interest_rate < MIN_RATE {
        return Err(LendingError::InvalidInput {
            field: "interest_rate".into(),
            reason: format!("Minimum interest rate is {MIN_RATE}%."),
        });
    }
    if terms.interest_rate > MAX_RATE {
        return Err(LendingError::InvalidInput {
            field: "interest_rate".into(),
            reason: format!("Maximum interest rate is {MAX_RATE}%."),
        });
    }
    if terms.duration_months < MIN_DURATION_MONTHS {
        return Err(LendingError::InvalidInput {
            field: "duration_months".into(),
            reason: format!("Minimum duration is {MIN_DURATION_MONTHS} month."),
        });
    }
    if terms.duration_months > MAX_DURATION_MONTHS {
        return Err(LendingError::InvalidInput {
            field: "duration_months".into(),
            reason: format!("Maximum duration is {MAX_DURATION_MONTHS} months."),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InterestType;

    fn policy_terms() -> LoanTerms {
        LoanTerms {
            principal_amount: dec!(50000),
            interest_rate: dec!(2),
            interest_type: InterestType::MonthlyFlat,
            duration_months: 12,
        }
    }

    #[test]
    fn test_within_policy_passes() {
        assert!(validate_loan_application(&policy_terms()).is_ok());
    }

    #[test]
    fn test_policy_edges_pass() {
        let mut terms = policy_terms();
        terms.principal_amount = MIN_PRINCIPAL;
        terms.interest_rate = MIN_RATE;
        terms.duration_months = MIN_DURATION_MONTHS;
        assert!(validate_loan_application(&terms).is_ok());

        terms.principal_amount = MAX_PRINCIPAL;
        terms.interest_rate = MAX_RATE;
        terms.duration_months = MAX_DURATION_MONTHS;
        assert!(validate_loan_application(&terms).is_ok());
    }

    #[test]
    fn test_out_of_policy_rejected() {
        let cases: Vec<Box<dyn Fn(&mut LoanTerms)>> = vec![
            Box::new(|t| t.principal_amount = dec!(999)),
            Box::new(|t| t.principal_amount = dec!(10000001)),
            Box::new(|t| t.interest_rate = dec!(0.4)),
            Box::new(|t| t.interest_rate = dec!(36.5)),
            Box::new(|t| t.duration_months = 0),
            Box::new(|t| t.duration_months = 121),
        ];

        for mutate in cases {
            let mut terms = policy_terms();
            mutate(&mut terms);
            let err = validate_loan_application(&terms).unwrap_err();
            assert!(matches!(err, LendingError::InvalidInput { .. }));
        }
    }
}
