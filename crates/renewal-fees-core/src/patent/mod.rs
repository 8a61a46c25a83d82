//! Patent renewal (annuity) fee calculations.

pub mod renewal;

pub use renewal::{calculate_patent_renewal_fees, PatentRenewalInput};
