//! Trademark renewal fee calculations.

pub mod renewal;

pub use renewal::{calculate_trademark_renewal_fees, TrademarkRenewalInput};
