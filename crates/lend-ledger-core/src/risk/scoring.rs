//! Delinquency risk scoring for borrowers with running loans.
//!
//! The score is additive over four independently capped terms:
//! 1. **Missed payments** -- 10 points each, capped at 40.
//! 2. **Delay days** -- 5 points per full week late, capped at 25.
//! 3. **Payment progress** -- up to 15 points for collections behind the
//!    expected mid-term pace.
//! 4. **History** -- up to 20 points from the borrower's past default rate.
//!
//! The final score is clipped to 100 and bucketed into a category that
//! drives the recommended collection action.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{BorrowerStatus, Money, RiskCategory};

const MISSED_PAYMENT_POINTS: u32 = 10;
const MISSED_PAYMENT_CAP: u32 = 40;
const DELAY_WEEK_POINTS: u32 = 5;
const DELAY_CAP: u32 = 25;
const PROGRESS_CAP: u32 = 15;
/// Collections expected to reach 50% by mid-term.
const EXPECTED_MID_TERM_PROGRESS: Decimal = dec!(50);
const HISTORY_POINTS: Decimal = dec!(20);
const MAX_SCORE: u32 = 100;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Repayment track record across a borrower's past loans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorrowerHistory {
    pub total_loans: u32,
    pub closed_on_time: u32,
    pub defaulted: u32,
}

/// Delinquency counters for the loan under review. The counters are
/// maintained by the caller; scoring is a pure function of this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInput {
    pub missed_payments: u32,
    /// Cumulative days late across all installments.
    pub total_delay_days: u32,
    pub loan_amount: Money,
    /// Share of the receivable collected so far, 0-100.
    pub paid_percentage: Decimal,
    #[serde(default)]
    pub borrower_history: BorrowerHistory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    /// 0-100; higher is riskier.
    pub score: u32,
    pub category: RiskCategory,
    /// Human-readable contributors, in scoring order. Empty when nothing
    /// triggered.
    pub factors: Vec<String>,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Score a borrower's delinquency risk from the current counters.
pub fn calculate_risk_score(input: &RiskInput) -> RiskResult {
    let mut score = 0u32;
    let mut factors = Vec::new();

    let missed = input.missed_payments;
    score += missed
        .saturating_mul(MISSED_PAYMENT_POINTS)
        .min(MISSED_PAYMENT_CAP);
    if missed >= 3 {
        factors.push(format!("{missed} missed payments - HIGH RISK"));
    } else if missed >= 1 {
        factors.push(format!("{missed} missed payment(s)"));
    }

    score += (input.total_delay_days / 7 * DELAY_WEEK_POINTS).min(DELAY_CAP);
    // Points accrue from the first full week; the factor line only appears
    // once the delay is past a month.
    if input.total_delay_days > 30 {
        factors.push(format!("{} days total delay", input.total_delay_days));
    }

    if input.paid_percentage < EXPECTED_MID_TERM_PROGRESS {
        let shortfall = (EXPECTED_MID_TERM_PROGRESS - input.paid_percentage) / dec!(4);
        score += score_points(shortfall).min(PROGRESS_CAP);
        factors.push(format!("Only {}% paid so far", input.paid_percentage));
    }

    let history = &input.borrower_history;
    if history.total_loans > 0 {
        let default_rate =
            Decimal::from(history.defaulted) / Decimal::from(history.total_loans);
        score += score_points(default_rate * HISTORY_POINTS);
        if history.defaulted > 0 {
            factors.push(format!(
                "Previous default history: {} loans",
                history.defaulted
            ));
        }
    }

    let score = score.min(MAX_SCORE);
    let (category, recommendation) = classify(score);

    RiskResult {
        score,
        category,
        factors,
        recommendation: recommendation.into(),
    }
}

fn score_points(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

fn classify(score: u32) -> (RiskCategory, &'static str) {
    if score <= 20 {
        (
            RiskCategory::Low,
            "Borrower is performing well. Continue monitoring.",
        )
    } else if score <= 45 {
        (
            RiskCategory::Medium,
            "Send reminder. Consider follow-up call.",
        )
    } else if score <= 70 {
        (
            RiskCategory::High,
            "Immediate action required. Personal visit recommended.",
        )
    } else {
        (
            RiskCategory::Critical,
            "Consider legal action or write-off. Document everything.",
        )
    }
}

/// Operational status bucket implied by the missed-payment count alone.
pub fn borrower_status(missed_payments: u32) -> BorrowerStatus {
    match missed_payments {
        0 => BorrowerStatus::Active,
        1..=2 => BorrowerStatus::Delay,
        _ => BorrowerStatus::DefaultRisk,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn quiet_input() -> RiskInput {
        RiskInput {
            missed_payments: 0,
            total_delay_days: 0,
            loan_amount: dec!(50000),
            paid_percentage: dec!(60),
            borrower_history: BorrowerHistory::default(),
        }
    }

    #[test]
    fn test_clean_borrower_scores_zero() {
        let result = calculate_risk_score(&quiet_input());
        assert_eq!(result.score, 0);
        assert_eq!(result.category, RiskCategory::Low);
        assert!(result.factors.is_empty());
        assert_eq!(
            result.recommendation,
            "Borrower is performing well. Continue monitoring."
        );
    }

    #[test]
    fn test_delinquent_borrower_concrete() {
        // 3 missed (30) + 35 delay days (25) + 20% paid (round(7.5)=8)
        // + 1 of 5 loans defaulted (4) = 67 -> HIGH.
        let result = calculate_risk_score(&RiskInput {
            missed_payments: 3,
            total_delay_days: 35,
            loan_amount: dec!(50000),
            paid_percentage: dec!(20),
            borrower_history: BorrowerHistory {
                total_loans: 5,
                closed_on_time: 3,
                defaulted: 1,
            },
        });

        assert_eq!(result.score, 67);
        assert_eq!(result.category, RiskCategory::High);
        assert_eq!(
            result.factors,
            vec![
                "3 missed payments - HIGH RISK".to_string(),
                "35 days total delay".to_string(),
                "Only 20% paid so far".to_string(),
                "Previous default history: 1 loans".to_string(),
            ]
        );
        assert_eq!(
            result.recommendation,
            "Immediate action required. Personal visit recommended."
        );
    }

    #[test]
    fn test_missed_payment_term_caps_at_40() {
        let mut input = quiet_input();
        input.missed_payments = 12;
        let result = calculate_risk_score(&input);
        assert_eq!(result.score, 40);
    }

    #[test]
    fn test_missed_payment_factor_phrasing() {
        let mut input = quiet_input();
        input.missed_payments = 1;
        assert_eq!(
            calculate_risk_score(&input).factors,
            vec!["1 missed payment(s)".to_string()]
        );
        input.missed_payments = 3;
        assert_eq!(
            calculate_risk_score(&input).factors,
            vec!["3 missed payments - HIGH RISK".to_string()]
        );
    }

    #[test]
    fn test_delay_scores_below_factor_threshold() {
        // Two full weeks late scores 10 points but stays out of the factor
        // list until the delay passes 30 days.
        let mut input = quiet_input();
        input.total_delay_days = 14;
        let result = calculate_risk_score(&input);
        assert_eq!(result.score, 10);
        assert!(result.factors.is_empty());

        input.total_delay_days = 31;
        let result = calculate_risk_score(&input);
        assert_eq!(result.factors, vec!["31 days total delay".to_string()]);
    }

    #[test]
    fn test_progress_term_only_below_midpoint() {
        let mut input = quiet_input();
        input.paid_percentage = dec!(50);
        assert_eq!(calculate_risk_score(&input).score, 0);

        input.paid_percentage = dec!(0);
        let result = calculate_risk_score(&input);
        // round(50/4) = 13, under the 15-point cap.
        assert_eq!(result.score, 13);
        assert_eq!(result.factors, vec!["Only 0% paid so far".to_string()]);
    }

    #[test]
    fn test_history_term_skipped_without_loans() {
        let mut input = quiet_input();
        input.borrower_history = BorrowerHistory {
            total_loans: 0,
            closed_on_time: 0,
            defaulted: 0,
        };
        assert_eq!(calculate_risk_score(&input).score, 0);
    }

    #[test]
    fn test_history_factor_needs_a_default() {
        let mut input = quiet_input();
        input.borrower_history = BorrowerHistory {
            total_loans: 4,
            closed_on_time: 4,
            defaulted: 0,
        };
        let result = calculate_risk_score(&input);
        assert_eq!(result.score, 0);
        assert!(result.factors.is_empty());

        input.borrower_history.defaulted = 2;
        let result = calculate_risk_score(&input);
        // round(2/4 * 20) = 10.
        assert_eq!(result.score, 10);
        assert_eq!(
            result.factors,
            vec!["Previous default history: 2 loans".to_string()]
        );
    }

    #[test]
    fn test_category_boundaries() {
        // Exact scores land via missed payments (x10) and delay weeks (x5).
        let mut input = quiet_input();
        input.missed_payments = 2;
        assert_eq!(calculate_risk_score(&input).category, RiskCategory::Low);

        input.total_delay_days = 7;
        // 20 + 5 = 25.
        assert_eq!(calculate_risk_score(&input).category, RiskCategory::Medium);

        input.missed_payments = 4;
        input.total_delay_days = 7;
        // 40 + 5 = 45, still MEDIUM.
        assert_eq!(calculate_risk_score(&input).category, RiskCategory::Medium);

        input.total_delay_days = 14;
        // 40 + 10 = 50.
        assert_eq!(calculate_risk_score(&input).category, RiskCategory::High);

        input.total_delay_days = 49;
        input.paid_percentage = dec!(0);
        // 40 + 25 + 13 = 78.
        assert_eq!(
            calculate_risk_score(&input).category,
            RiskCategory::Critical
        );
    }

    #[test]
    fn test_score_clipped_to_100() {
        let result = calculate_risk_score(&RiskInput {
            missed_payments: 40,
            total_delay_days: 400,
            loan_amount: dec!(900000),
            paid_percentage: dec!(-10),
            borrower_history: BorrowerHistory {
                total_loans: 3,
                closed_on_time: 0,
                defaulted: 3,
            },
        });
        // 40 + 25 + 15 + 20 exactly fills the scale.
        assert_eq!(result.score, 100);
        assert_eq!(result.category, RiskCategory::Critical);
    }

    #[test]
    fn test_borrower_status_buckets() {
        assert_eq!(borrower_status(0), BorrowerStatus::Active);
        assert_eq!(borrower_status(1), BorrowerStatus::Delay);
        assert_eq!(borrower_status(2), BorrowerStatus::Delay);
        assert_eq!(borrower_status(3), BorrowerStatus::DefaultRisk);
        assert_eq!(borrower_status(12), BorrowerStatus::DefaultRisk);
    }
}
