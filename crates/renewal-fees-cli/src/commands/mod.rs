pub mod patent;
pub mod trademark;

use chrono::NaiveDate;
use renewal_fees_core::schedule;

/// Resolve the signed day count from either an explicit `--days-until-renewal`
/// or a due date (measured against `--as-of`, defaulting to today).
pub(crate) fn resolve_days(
    days: Option<i64>,
    due: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
) -> Result<i64, Box<dyn std::error::Error>> {
    match (days, due) {
        (Some(d), _) => Ok(d),
        (None, Some(due)) => {
            let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
            Ok(schedule::days_until_renewal(as_of, due))
        }
        (None, None) => {
            Err("--days-until-renewal or --renewal-date is required (or provide --input)".into())
        }
    }
}
