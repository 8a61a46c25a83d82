use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use renewal_fees_core::patent::{calculate_patent_renewal_fees, PatentRenewalInput};
use renewal_fees_core::schedule;

use crate::input;

/// Arguments for patent renewal (annuity) fee calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PatentArgs {
    /// Days until the annuity due date (negative when overdue)
    #[arg(long)]
    pub days_until_renewal: Option<i64>,

    /// Annuity due date (YYYY-MM-DD); alternative to --days-until-renewal
    #[arg(long, conflicts_with = "days_until_renewal")]
    pub renewal_date: Option<NaiveDate>,

    /// Reference date for --renewal-date and --granted (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Renewal year being paid for (1-based)
    #[arg(long)]
    pub year: Option<u32>,

    /// Grant date (YYYY-MM-DD); alternative to --year
    #[arg(long, conflicts_with = "year")]
    pub granted: Option<NaiveDate>,

    /// Holder qualifies as a small entity
    #[arg(long)]
    pub small_entity: bool,

    /// Holder maintains multiple patents
    #[arg(long)]
    pub multiple_patents: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_patent(args: PatentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pat_input: PatentRenewalInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let year_number = match (args.year, args.granted) {
            (Some(y), _) => y,
            (None, Some(granted)) => {
                let as_of = args
                    .as_of
                    .unwrap_or_else(|| chrono::Local::now().date_naive());
                schedule::renewal_year_number(granted, as_of)?
            }
            (None, None) => {
                return Err("--year or --granted is required (or provide --input)".into())
            }
        };

        PatentRenewalInput {
            days_until_renewal: super::resolve_days(
                args.days_until_renewal,
                args.renewal_date,
                args.as_of,
            )?,
            year_number,
            is_small_entity: args.small_entity,
            has_multiple_patents: args.multiple_patents,
        }
    };

    let output = calculate_patent_renewal_fees(&pat_input)?;
    Ok(serde_json::to_value(&output)?)
}
