use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use renewal_fees_core::trademark::{calculate_trademark_renewal_fees, TrademarkRenewalInput};

use crate::input;

/// Arguments for trademark renewal fee calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct TrademarkArgs {
    /// Days until the renewal due date (negative when overdue)
    #[arg(long)]
    pub days_until_renewal: Option<i64>,

    /// Renewal due date (YYYY-MM-DD); alternative to --days-until-renewal
    #[arg(long, conflicts_with = "days_until_renewal")]
    pub renewal_date: Option<NaiveDate>,

    /// Reference date for --renewal-date (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Number of registered classes
    #[arg(long, default_value = "1")]
    pub classes: u32,

    /// International (Madrid-route) registration
    #[arg(long)]
    pub international: bool,

    /// Number of previous renewals
    #[arg(long, default_value = "0")]
    pub previous_renewals: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_trademark(args: TrademarkArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tm_input: TrademarkRenewalInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TrademarkRenewalInput {
            days_until_renewal: super::resolve_days(
                args.days_until_renewal,
                args.renewal_date,
                args.as_of,
            )?,
            class_count: args.classes,
            is_international: args.international,
            previous_renewals: args.previous_renewals,
        }
    };

    let output = calculate_trademark_renewal_fees(&tm_input)?;
    Ok(serde_json::to_value(&output)?)
}
