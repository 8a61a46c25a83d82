pub mod breakdown;
pub mod error;
pub mod types;

#[cfg(feature = "trademark")]
pub mod trademark;

#[cfg(feature = "patent")]
pub mod patent;

#[cfg(feature = "schedule")]
pub mod schedule;

pub use breakdown::{format_fee_breakdown, FeeBreakdown, FeeLine};
pub use error::RenewalFeeError;
pub use types::*;

/// Standard result type for all renewal-fee operations
pub type RenewalFeeResult<T> = Result<T, RenewalFeeError>;
