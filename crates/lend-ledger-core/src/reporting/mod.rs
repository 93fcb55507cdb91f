pub mod ledger;

pub use ledger::{
    daily_activity, monthly_ledger, DailyActivity, LoanRecord, MonthlyLedger, PaymentRecord,
};
