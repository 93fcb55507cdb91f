pub mod accrual;
pub mod waterfall;

pub use accrual::accrued_interest;
pub use waterfall::{allocate_payment, AllocationInput, AllocationResult};
