//! Trademark renewal fee calculation.
//!
//! Covers:
//! 1. **Base fee** -- domestic vs. international registrations.
//! 2. **Per-class fees** -- each class beyond the first carries a flat charge.
//! 3. **Late-renewal penalties** -- a surcharge inside the six-month grace
//!    period, a restoration fee once the grace period has lapsed.
//! 4. **Loyalty discount** -- per prior renewal, capped.
//!
//! All arithmetic uses `rust_decimal::Decimal` on whole currency units.
//! `days_until_renewal` is signed: negative means the renewal is overdue by
//! that many days. The calculator never reads the clock; callers derive the
//! day count from stored dates (see the `schedule` module).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{FeeBreakdown, FeeLine};
use crate::error::RenewalFeeError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::RenewalFeeResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Base renewal fee for a domestic registration.
const DOMESTIC_BASE_FEE: Money = dec!(200);

/// Base renewal fee for an international registration.
const INTERNATIONAL_BASE_FEE: Money = dec!(250);

/// Fee per class beyond the first.
const ADDITIONAL_CLASS_FEE: Money = dec!(50);

/// Flat processing fee for international registrations.
const INTERNATIONAL_PROCESSING_FEE: Money = dec!(100);

/// Penalty for renewing late but within the grace period.
const LATE_RENEWAL_PENALTY: Money = dec!(90);

/// Restoration fee once the grace period has lapsed.
const RESTORATION_FEE: Money = dec!(150);

/// Grace period after the due date, in days. Overdue by exactly this many
/// days already falls into the restoration band.
const GRACE_PERIOD_DAYS: i64 = 180;

/// Loyalty discount earned per prior renewal.
const LOYALTY_DISCOUNT_PER_RENEWAL: Money = dec!(10);

/// Ceiling on the loyalty discount.
const LOYALTY_DISCOUNT_CAP: Money = dec!(50);

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Full input for a trademark renewal fee calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrademarkRenewalInput {
    /// Days until the renewal due date; negative when overdue.
    pub days_until_renewal: i64,
    /// Number of registered classes (at least 1).
    pub class_count: u32,
    /// Whether this is an international (Madrid-route) registration.
    pub is_international: bool,
    /// Number of times the mark has been renewed before.
    pub previous_renewals: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the priced breakdown for a trademark renewal.
///
/// Rules are applied in a fixed order: base fee, additional-class fees,
/// international processing, late penalty, loyalty discount. Each rule
/// contributes independently; the total is derived from the assembled parts.
pub fn calculate_trademark_renewal_fees(
    input: &TrademarkRenewalInput,
) -> RenewalFeeResult<ComputationOutput<FeeBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate ---------------------------------------------------------
    validate_input(input)?;

    // --- Base fee ---------------------------------------------------------
    let base_fee = if input.is_international {
        INTERNATIONAL_BASE_FEE
    } else {
        DOMESTIC_BASE_FEE
    };

    // --- Additional fees --------------------------------------------------
    let mut additional_fees: Vec<FeeLine> = Vec::new();

    if input.class_count > 1 {
        let extra = input.class_count - 1;
        additional_fees.push(FeeLine::new(
            format!("Additional classes ({})", extra),
            Decimal::from(extra) * ADDITIONAL_CLASS_FEE,
        ));
    }

    if input.is_international {
        additional_fees.push(FeeLine::new(
            "International processing",
            INTERNATIONAL_PROCESSING_FEE,
        ));
    }

    // --- Late-renewal penalty (mutually exclusive bands) ------------------
    let mut penalties: Vec<FeeLine> = Vec::new();

    if input.days_until_renewal < 0 {
        if input.days_until_renewal > -GRACE_PERIOD_DAYS {
            penalties.push(FeeLine::new(
                "Late renewal penalty (within 6 months)",
                LATE_RENEWAL_PENALTY,
            ));
        } else {
            penalties.push(FeeLine::new("Restoration fee", RESTORATION_FEE));
            warnings.push(format!(
                "Registration lapsed {} days past the {}-day grace period; \
                 restoration fee applied.",
                -input.days_until_renewal - GRACE_PERIOD_DAYS,
                GRACE_PERIOD_DAYS
            ));
        }
    }

    // --- Loyalty discount -------------------------------------------------
    let mut discounts: Vec<FeeLine> = Vec::new();

    if input.previous_renewals > 1 {
        let earned = Decimal::from(input.previous_renewals) * LOYALTY_DISCOUNT_PER_RENEWAL;
        discounts.push(FeeLine::new(
            "Loyalty discount",
            earned.min(LOYALTY_DISCOUNT_CAP),
        ));
    }

    // --- Assemble ---------------------------------------------------------
    let breakdown = FeeBreakdown::assemble(base_fee, additional_fees, penalties, discounts);

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Trademark Renewal Fees — base fee, per-class fees, late penalties, loyalty discount",
        &serde_json::json!({
            "base_fee_domestic": DOMESTIC_BASE_FEE,
            "base_fee_international": INTERNATIONAL_BASE_FEE,
            "additional_class_fee": ADDITIONAL_CLASS_FEE,
            "international_processing_fee": INTERNATIONAL_PROCESSING_FEE,
            "late_renewal_penalty": LATE_RENEWAL_PENALTY,
            "restoration_fee": RESTORATION_FEE,
            "grace_period_days": GRACE_PERIOD_DAYS,
            "loyalty_discount_per_renewal": LOYALTY_DISCOUNT_PER_RENEWAL,
            "loyalty_discount_cap": LOYALTY_DISCOUNT_CAP,
        }),
        warnings,
        elapsed,
        breakdown,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &TrademarkRenewalInput) -> RenewalFeeResult<()> {
    if input.class_count == 0 {
        return Err(RenewalFeeError::InvalidInput {
            field: "class_count".into(),
            reason: "A registration covers at least one class".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
