pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "allocation")]
pub mod allocation;

#[cfg(feature = "risk")]
pub mod risk;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "numbering")]
pub mod numbering;

#[cfg(feature = "reporting")]
pub mod reporting;

pub use error::LendingError;
pub use types::*;

/// Standard result type for all lend-ledger operations
pub type LendingResult<T> = Result<T, LendingError>;
