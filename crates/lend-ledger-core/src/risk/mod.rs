pub mod scoring;

pub use scoring::{borrower_status, calculate_risk_score, BorrowerHistory, RiskInput, RiskResult};
