//! Date helpers for deriving calculator inputs from stored dates.
//!
//! The calculators never read the wall clock: callers pass a precomputed
//! `days_until_renewal` and (for patents) `year_number`. These helpers do
//! that derivation from the dates a register actually stores -- the renewal
//! due date and the grant date -- so every caller lands on the same counts.

use chrono::NaiveDate;

use crate::error::RenewalFeeError;
use crate::RenewalFeeResult;

/// Signed day count from `as_of` to the renewal due date.
///
/// Negative when the due date has passed, which is exactly the overdue
/// convention the calculators expect.
pub fn days_until_renewal(as_of: NaiveDate, due: NaiveDate) -> i64 {
    (due - as_of).num_days()
}

/// The 1-based renewal year containing `as_of`, counted from the grant date.
///
/// The first year of protection is year 1; each grant-date anniversary
/// starts the next. Errors when `as_of` precedes the grant date.
pub fn renewal_year_number(granted: NaiveDate, as_of: NaiveDate) -> RenewalFeeResult<u32> {
    if as_of < granted {
        return Err(RenewalFeeError::DateError(format!(
            "as-of date {} precedes grant date {}",
            as_of, granted
        )));
    }

    let mut years = as_of.years_since(granted).unwrap_or(0);
    // years_since counts completed years; the year in progress is one more.
    years += 1;
    Ok(years)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -------------------------------------------------------------------
    // 1. Days until a future due date are positive
    // -------------------------------------------------------------------
    #[test]
    fn test_days_until_future_due_date() {
        assert_eq!(
            days_until_renewal(date(2026, 1, 1), date(2026, 1, 31)),
            30
        );
    }

    // -------------------------------------------------------------------
    // 2. A passed due date yields negative days (overdue)
    // -------------------------------------------------------------------
    #[test]
    fn test_days_past_due_date_negative() {
        assert_eq!(
            days_until_renewal(date(2026, 6, 29), date(2026, 1, 1)),
            -179
        );
        assert_eq!(
            days_until_renewal(date(2026, 6, 30), date(2026, 1, 1)),
            -180
        );
    }

    // -------------------------------------------------------------------
    // 3. Due today is zero days
    // -------------------------------------------------------------------
    #[test]
    fn test_due_today_is_zero() {
        assert_eq!(days_until_renewal(date(2026, 3, 1), date(2026, 3, 1)), 0);
    }

    // -------------------------------------------------------------------
    // 4. Renewal year counts from the grant date, 1-based
    // -------------------------------------------------------------------
    #[test]
    fn test_renewal_year_counting() {
        let granted = date(2020, 5, 15);

        // Day of grant is within year 1
        assert_eq!(renewal_year_number(granted, granted).unwrap(), 1);
        // Day before the first anniversary is still year 1
        assert_eq!(
            renewal_year_number(granted, date(2021, 5, 14)).unwrap(),
            1
        );
        // The anniversary starts year 2
        assert_eq!(
            renewal_year_number(granted, date(2021, 5, 15)).unwrap(),
            2
        );
        // Well into the term
        assert_eq!(
            renewal_year_number(granted, date(2026, 8, 30)).unwrap(),
            7
        );
    }

    // -------------------------------------------------------------------
    // 5. As-of before the grant date is a date error
    // -------------------------------------------------------------------
    #[test]
    fn test_year_before_grant_rejected() {
        let result = renewal_year_number(date(2020, 5, 15), date(2019, 1, 1));
        assert!(matches!(result, Err(RenewalFeeError::DateError(_))));
    }
}
