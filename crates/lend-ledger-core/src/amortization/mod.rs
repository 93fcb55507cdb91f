pub mod schedule;

pub use schedule::{calculate_loan, CalculationResult, LoanTerms, ScheduleEntry};
