//! Itemized fee breakdown shared by the trademark and patent calculators.
//!
//! A [`FeeBreakdown`] is a value object: it is assembled once, the total is
//! derived at construction, and it is never mutated afterwards. The invariant
//! `total == base_fee + Σadditional + Σpenalties − Σdiscounts` holds exactly
//! for every breakdown produced through [`FeeBreakdown::assemble`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::types::Money;

/// A single labeled charge or reduction on a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    pub description: String,
    pub amount: Money,
}

impl FeeLine {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        FeeLine {
            description: description.into(),
            amount,
        }
    }
}

/// Priced breakdown for a single renewal: base fee, itemized add-ons,
/// penalties, discounts, and the derived total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub base_fee: Money,
    pub additional_fees: Vec<FeeLine>,
    pub penalties: Vec<FeeLine>,
    pub discounts: Vec<FeeLine>,
    pub total: Money,
}

impl FeeBreakdown {
    /// Assemble a breakdown from its parts, deriving the total.
    ///
    /// Totals are only ever computed here so the aggregation invariant holds
    /// for every breakdown the crate hands out.
    pub fn assemble(
        base_fee: Money,
        additional_fees: Vec<FeeLine>,
        penalties: Vec<FeeLine>,
        discounts: Vec<FeeLine>,
    ) -> Self {
        let total = base_fee + sum(&additional_fees) + sum(&penalties) - sum(&discounts);
        FeeBreakdown {
            base_fee,
            additional_fees,
            penalties,
            discounts,
            total,
        }
    }

    /// Sum of the additional-fee lines.
    pub fn additional_total(&self) -> Money {
        sum(&self.additional_fees)
    }

    /// Sum of the penalty lines.
    pub fn penalty_total(&self) -> Money {
        sum(&self.penalties)
    }

    /// Sum of the discount lines.
    pub fn discount_total(&self) -> Money {
        sum(&self.discounts)
    }
}

fn sum(lines: &[FeeLine]) -> Money {
    lines.iter().map(|line| line.amount).sum::<Decimal>()
}

/// Render a breakdown as a human-readable statement: base fee, additional
/// fees, penalties, discounts (negated), then the total.
pub fn format_fee_breakdown(breakdown: &FeeBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Base fee: {}", breakdown.base_fee);
    for line in &breakdown.additional_fees {
        let _ = writeln!(out, "{}: {}", line.description, line.amount);
    }
    for line in &breakdown.penalties {
        let _ = writeln!(out, "{}: {}", line.description, line.amount);
    }
    for line in &breakdown.discounts {
        let _ = writeln!(out, "{}: -{}", line.description, line.amount);
    }
    let _ = write!(out, "Total: {}", breakdown.total);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
