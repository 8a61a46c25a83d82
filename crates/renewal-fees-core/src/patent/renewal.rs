//! Patent renewal (annuity) fee calculation.
//!
//! Covers:
//! 1. **Base fee** -- rises linearly with the renewal year being paid for,
//!    capped after year 21.
//! 2. **Entity discounts** -- small-entity (50%) and portfolio (10%)
//!    discounts, each computed off the base fee and stacking independently.
//! 3. **Late-payment surcharges** -- 10% inside 90 days overdue, 50% up to
//!    180 days, a flat reinstatement fee beyond that.
//! 4. **Supplementary protection** -- flat fee for years past the standard
//!    20-year term.
//!
//! All arithmetic uses `rust_decimal::Decimal` on whole currency units.
//! Percentage-derived amounts round half away from zero to whole units
//! (`RoundingStrategy::MidpointAwayFromZero`), and are always computed from
//! the base fee, never from a partially adjusted running total.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::breakdown::{FeeBreakdown, FeeLine};
use crate::error::RenewalFeeError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::RenewalFeeResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Base fee for the first renewal year.
const FIRST_YEAR_BASE_FEE: Money = dec!(70);

/// Fee increment per renewal year after the first.
const YEARLY_INCREMENT: Money = dec!(20);

/// Ceiling on the cumulative yearly increment.
const YEARLY_INCREMENT_CAP: Money = dec!(400);

/// Small-entity discount rate, applied to the base fee.
const SMALL_ENTITY_DISCOUNT_RATE: Rate = dec!(0.5);

/// Portfolio discount rate for holders of multiple patents.
const PORTFOLIO_DISCOUNT_RATE: Rate = dec!(0.1);

/// Surcharge rate while fewer than 90 days overdue.
const LATE_SURCHARGE_RATE: Rate = dec!(0.1);

/// Surcharge rate from 90 up to (but not including) 180 days overdue.
const EXTENDED_SURCHARGE_RATE: Rate = dec!(0.5);

/// Flat reinstatement fee at 180 or more days overdue.
const REINSTATEMENT_FEE: Money = dec!(300);

/// First overdue band ends here (exclusive: -90 itself is the 50% band).
const LATE_BAND_DAYS: i64 = 90;

/// Second overdue band ends here (inclusive: -180 is reinstatement).
const REINSTATEMENT_BAND_DAYS: i64 = 180;

/// Standard patent term in years; later years carry the supplementary fee.
const STANDARD_TERM_YEARS: u32 = 20;

/// Flat supplementary protection fee for years past the standard term.
const SUPPLEMENTARY_PROTECTION_FEE: Money = dec!(200);

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Full input for a patent renewal fee calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentRenewalInput {
    /// Days until the annuity due date; negative when overdue.
    pub days_until_renewal: i64,
    /// The renewal year being paid for (1-based).
    pub year_number: u32,
    /// Whether the holder qualifies as a small entity.
    pub is_small_entity: bool,
    /// Whether the holder maintains multiple patents with the office.
    pub has_multiple_patents: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the priced breakdown for a patent renewal.
///
/// Rules are applied in a fixed order: base fee, entity discounts, late
/// surcharge, supplementary protection fee. Both discounts and the
/// percentage surcharges are computed from the base fee alone.
pub fn calculate_patent_renewal_fees(
    input: &PatentRenewalInput,
) -> RenewalFeeResult<ComputationOutput<FeeBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate ---------------------------------------------------------
    validate_input(input)?;

    // --- Base fee: 70 + min((year - 1) * 20, 400) -------------------------
    let increment =
        (Decimal::from(input.year_number - 1) * YEARLY_INCREMENT).min(YEARLY_INCREMENT_CAP);
    let base_fee = FIRST_YEAR_BASE_FEE + increment;

    // --- Entity discounts (each off the same base fee) --------------------
    let mut discounts: Vec<FeeLine> = Vec::new();

    if input.is_small_entity {
        discounts.push(FeeLine::new(
            "Small entity discount",
            round_units(base_fee * SMALL_ENTITY_DISCOUNT_RATE),
        ));
    }

    if input.has_multiple_patents {
        discounts.push(FeeLine::new(
            "Portfolio discount",
            round_units(base_fee * PORTFOLIO_DISCOUNT_RATE),
        ));
    }

    // --- Late-payment penalty (mutually exclusive bands) ------------------
    let mut penalties: Vec<FeeLine> = Vec::new();

    if input.days_until_renewal < 0 {
        if input.days_until_renewal > -LATE_BAND_DAYS {
            penalties.push(FeeLine::new(
                "Late payment surcharge (10%)",
                round_units(base_fee * LATE_SURCHARGE_RATE),
            ));
        } else if input.days_until_renewal > -REINSTATEMENT_BAND_DAYS {
            penalties.push(FeeLine::new(
                "Late payment surcharge (50%)",
                round_units(base_fee * EXTENDED_SURCHARGE_RATE),
            ));
        } else {
            penalties.push(FeeLine::new("Reinstatement fee", REINSTATEMENT_FEE));
            warnings.push(format!(
                "Patent lapsed {} days past the {}-day late-payment window; \
                 reinstatement fee applied.",
                -input.days_until_renewal - REINSTATEMENT_BAND_DAYS,
                REINSTATEMENT_BAND_DAYS
            ));
        }
    }

    // --- Supplementary protection past the standard term ------------------
    let mut additional_fees: Vec<FeeLine> = Vec::new();

    if input.year_number > STANDARD_TERM_YEARS {
        additional_fees.push(FeeLine::new(
            "Supplementary protection fee",
            SUPPLEMENTARY_PROTECTION_FEE,
        ));
    }

    // --- Assemble ---------------------------------------------------------
    let breakdown = FeeBreakdown::assemble(base_fee, additional_fees, penalties, discounts);

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Patent Renewal Fees — year-scaled base fee, entity discounts, late surcharges, supplementary protection",
        &serde_json::json!({
            "first_year_base_fee": FIRST_YEAR_BASE_FEE,
            "yearly_increment": YEARLY_INCREMENT,
            "yearly_increment_cap": YEARLY_INCREMENT_CAP,
            "small_entity_discount_rate": SMALL_ENTITY_DISCOUNT_RATE,
            "portfolio_discount_rate": PORTFOLIO_DISCOUNT_RATE,
            "late_surcharge_rate": LATE_SURCHARGE_RATE,
            "extended_surcharge_rate": EXTENDED_SURCHARGE_RATE,
            "reinstatement_fee": REINSTATEMENT_FEE,
            "supplementary_protection_fee": SUPPLEMENTARY_PROTECTION_FEE,
            "standard_term_years": STANDARD_TERM_YEARS,
            "rounding": "half away from zero, whole currency units",
            "discount_basis": "base fee (discounts and surcharges never compound)",
        }),
        warnings,
        elapsed,
        breakdown,
    ))
}

/// Round a percentage-derived amount to whole currency units, half away
/// from zero.
fn round_units(amount: Money) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &PatentRenewalInput) -> RenewalFeeResult<()> {
    if input.year_number == 0 {
        return Err(RenewalFeeError::InvalidInput {
            field: "year_number".into(),
            reason: "Renewal years are counted from 1".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    // --- Helper: on-time year-5 renewal, no discounts ---------------------
    fn year_five_renewal() -> PatentRenewalInput {
        PatentRenewalInput {
            days_until_renewal: 30,
            year_number: 5,
            is_small_entity: false,
            has_multiple_patents: false,
        }
    }

    fn calculate(input: &PatentRenewalInput) -> FeeBreakdown {
        calculate_patent_renewal_fees(input).unwrap().result
    }

    // -------------------------------------------------------------------
    // 1. Base fee scales linearly with the renewal year
    // -------------------------------------------------------------------
    #[test]
    fn test_base_fee_scales_with_year() {
        let mut input = year_five_renewal();

        input.year_number = 1;
        assert_eq!(calculate(&input).base_fee, dec!(70));

        input.year_number = 2;
        assert_eq!(calculate(&input).base_fee, dec!(90));

        input.year_number = 5;
        assert_eq!(calculate(&input).base_fee, dec!(150));

        input.year_number = 20;
        assert_eq!(calculate(&input).base_fee, dec!(450));
    }

    // -------------------------------------------------------------------
    // 2. Base-fee increment caps at 400 from year 21 on
    // -------------------------------------------------------------------
    #[test]
    fn test_base_fee_increment_cap() {
        let mut input = year_five_renewal();

        input.year_number = 21;
        assert_eq!(calculate(&input).base_fee, dec!(470));

        input.year_number = 40;
        assert_eq!(calculate(&input).base_fee, dec!(470));
    }

    // -------------------------------------------------------------------
    // 3. Small entity, year 5, due today: discount halves the base fee
    // -------------------------------------------------------------------
    #[test]
    fn test_small_entity_year_five() {
        let input = PatentRenewalInput {
            days_until_renewal: 0,
            year_number: 5,
            is_small_entity: true,
            has_multiple_patents: false,
        };
        let out = calculate(&input);

        assert_eq!(out.base_fee, dec!(150));
        assert_eq!(out.discounts.len(), 1);
        assert_eq!(out.discounts[0].description, "Small entity discount");
        assert_eq!(out.discounts[0].amount, dec!(75));
        assert!(out.penalties.is_empty());
        assert_eq!(out.total, dec!(75));
    }

    // -------------------------------------------------------------------
    // 4. Year 25, multiple patents, 200 days overdue
    // -------------------------------------------------------------------
    #[test]
    fn test_lapsed_supplementary_year() {
        let input = PatentRenewalInput {
            days_until_renewal: -200,
            year_number: 25,
            is_small_entity: false,
            has_multiple_patents: true,
        };
        let out = calculate(&input);

        // Base 70 + min(24*20, 400) = 470
        assert_eq!(out.base_fee, dec!(470));

        // Portfolio discount round(470 * 0.1) = 47
        assert_eq!(out.discounts.len(), 1);
        assert_eq!(out.discounts[0].amount, dec!(47));

        // Past the late-payment window entirely
        assert_eq!(out.penalties.len(), 1);
        assert_eq!(out.penalties[0].description, "Reinstatement fee");
        assert_eq!(out.penalties[0].amount, dec!(300));

        // Supplementary protection past year 20
        assert_eq!(out.additional_fees.len(), 1);
        assert_eq!(
            out.additional_fees[0].description,
            "Supplementary protection fee"
        );
        assert_eq!(out.additional_fees[0].amount, dec!(200));

        // 470 + 200 + 300 - 47
        assert_eq!(out.total, dec!(923));
    }

    // -------------------------------------------------------------------
    // 5. Surcharge band boundaries: -89 / -90 / -179 / -180
    // -------------------------------------------------------------------
    #[test]
    fn test_surcharge_band_boundaries() {
        let mut input = year_five_renewal(); // base 150

        input.days_until_renewal = -89;
        let out = calculate(&input);
        assert_eq!(out.penalties[0].description, "Late payment surcharge (10%)");
        assert_eq!(out.penalties[0].amount, dec!(15));

        input.days_until_renewal = -90;
        let out = calculate(&input);
        assert_eq!(out.penalties[0].description, "Late payment surcharge (50%)");
        assert_eq!(out.penalties[0].amount, dec!(75));

        input.days_until_renewal = -179;
        let out = calculate(&input);
        assert_eq!(out.penalties[0].description, "Late payment surcharge (50%)");

        input.days_until_renewal = -180;
        let out = calculate(&input);
        assert_eq!(out.penalties[0].description, "Reinstatement fee");
        assert_eq!(out.penalties[0].amount, dec!(300));
    }

    // -------------------------------------------------------------------
    // 6. On-time and future payments carry no penalty
    // -------------------------------------------------------------------
    #[test]
    fn test_no_penalty_when_not_overdue() {
        let mut input = year_five_renewal();

        input.days_until_renewal = 0;
        assert!(calculate(&input).penalties.is_empty());

        input.days_until_renewal = 365;
        assert!(calculate(&input).penalties.is_empty());
    }

    // -------------------------------------------------------------------
    // 7. Discounts stack independently off the same base fee
    // -------------------------------------------------------------------
    #[test]
    fn test_discounts_stack_off_base_fee() {
        let input = PatentRenewalInput {
            days_until_renewal: 10,
            year_number: 5,
            is_small_entity: true,
            has_multiple_patents: true,
        };
        let out = calculate(&input);

        // Both off base 150: 75 and 15, not 75 and round(75 * 0.1)
        assert_eq!(out.discounts.len(), 2);
        assert_eq!(out.discounts[0].description, "Small entity discount");
        assert_eq!(out.discounts[0].amount, dec!(75));
        assert_eq!(out.discounts[1].description, "Portfolio discount");
        assert_eq!(out.discounts[1].amount, dec!(15));
        assert_eq!(out.total, dec!(60));
    }

    // -------------------------------------------------------------------
    // 8. Surcharge computed from the base fee even when discounted
    // -------------------------------------------------------------------
    #[test]
    fn test_surcharge_ignores_discounts() {
        let input = PatentRenewalInput {
            days_until_renewal: -30,
            year_number: 5,
            is_small_entity: true,
            has_multiple_patents: false,
        };
        let out = calculate(&input);

        // 10% of base 150, not of the discounted 75
        assert_eq!(out.penalties[0].amount, dec!(15));
        // 150 + 15 - 75
        assert_eq!(out.total, dec!(90));
    }

    // -------------------------------------------------------------------
    // 9. Supplementary protection applies from year 21, not year 20
    // -------------------------------------------------------------------
    #[test]
    fn test_supplementary_protection_threshold() {
        let mut input = year_five_renewal();

        input.year_number = 20;
        assert!(calculate(&input).additional_fees.is_empty());

        input.year_number = 21;
        let out = calculate(&input);
        assert_eq!(out.additional_fees.len(), 1);
        assert_eq!(out.additional_fees[0].amount, dec!(200));
    }

    // -------------------------------------------------------------------
    // 10. Aggregation invariant holds across a spread of inputs
    // -------------------------------------------------------------------
    #[test]
    fn test_total_aggregation_invariant() {
        let cases = [
            (30i64, 1u32, false, false),
            (-1, 3, true, false),
            (-90, 7, false, true),
            (-180, 12, true, true),
            (-400, 25, false, true),
            (0, 21, true, false),
        ];

        for (days, year, small, multiple) in cases {
            let input = PatentRenewalInput {
                days_until_renewal: days,
                year_number: year,
                is_small_entity: small,
                has_multiple_patents: multiple,
            };
            let out = calculate(&input);
            assert_eq!(
                out.total,
                out.base_fee + out.additional_total() + out.penalty_total()
                    - out.discount_total(),
                "Aggregation invariant violated for {:?}",
                input
            );
        }
    }

    // -------------------------------------------------------------------
    // 11. Identical inputs produce identical breakdowns
    // -------------------------------------------------------------------
    #[test]
    fn test_idempotent_for_identical_inputs() {
        let input = PatentRenewalInput {
            days_until_renewal: -200,
            year_number: 25,
            is_small_entity: false,
            has_multiple_patents: true,
        };
        assert_eq!(calculate(&input), calculate(&input));
    }

    // -------------------------------------------------------------------
    // 12. Percentage amounts are whole currency units
    // -------------------------------------------------------------------
    #[test]
    fn test_percentage_amounts_rounded_to_units() {
        // Every base fee is a whole number of units, so 10% and 50% of it
        // land on at most one decimal place; rounding still pins the scale.
        let input = PatentRenewalInput {
            days_until_renewal: -30,
            year_number: 2, // base 90, 10% = 9
            is_small_entity: false,
            has_multiple_patents: true, // 10% of 90 = 9
        };
        let out = calculate(&input);
        assert_eq!(out.penalties[0].amount, dec!(9));
        assert_eq!(out.discounts[0].amount, dec!(9));
        assert_eq!(out.penalties[0].amount.scale(), 0);
        assert_eq!(out.discounts[0].amount.scale(), 0);
    }

    // -------------------------------------------------------------------
    // 13. Validation: year zero rejected
    // -------------------------------------------------------------------
    #[test]
    fn test_invalid_year_zero() {
        let mut input = year_five_renewal();
        input.year_number = 0;

        let result = calculate_patent_renewal_fees(&input);
        assert!(result.is_err());
        match result.unwrap_err() {
            RenewalFeeError::InvalidInput { field, .. } => {
                assert_eq!(field, "year_number");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // -------------------------------------------------------------------
    // 14. Lapsed patent triggers a reinstatement warning
    // -------------------------------------------------------------------
    #[test]
    fn test_reinstatement_warning() {
        let mut input = year_five_renewal();
        input.days_until_renewal = -240;

        let result = calculate_patent_renewal_fees(&input).unwrap();
        assert!(
            result.warnings.iter().any(|w| w.contains("reinstatement")),
            "Expected a reinstatement warning"
        );
    }

    // -------------------------------------------------------------------
    // 15. Envelope metadata and assumptions populated
    // -------------------------------------------------------------------
    #[test]
    fn test_metadata_populated() {
        let result = calculate_patent_renewal_fees(&year_five_renewal()).unwrap();

        assert!(result.methodology.contains("Patent Renewal"));
        assert_eq!(result.metadata.precision, "rust_decimal_128bit");
        assert_eq!(result.assumptions["standard_term_years"], 20);
    }
}
