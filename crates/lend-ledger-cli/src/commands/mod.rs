pub mod allocate;
pub mod amortize;
pub mod ledger;
pub mod risk;
