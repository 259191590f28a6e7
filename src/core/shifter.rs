//! Calendar arithmetic for shelf-life stamps.
//!
//! The month path is not a generic month-add: label conventions say a
//! product made on the 15th is good *through* the 14th of the target month,
//! so the shifted day is `day - 1`, except that a product made on the 1st
//! rolls to the 1st, and days past the end of the target month clamp to the
//! month end. The day path is plain linear addition with an inclusive count
//! (the manufacturing day itself is day 1).
//!
//! Chrono's `checked_add_months` cannot express the day-minus-one rule, so
//! the month normalization and clamping are done by hand.

use crate::utils::error::{Result, StampError};
use chrono::{Datelike, Days, NaiveDate};

/// Shifts `start` forward by `months` calendar months under the label
/// convention described in the module docs.
///
/// Zero and negative month counts are accepted and shift backward; the
/// catalog format gives no way to spell them, but integer entries are taken
/// as-is and the asymmetry with the day path is deliberate.
pub fn shift_by_months(start: NaiveDate, months: i64) -> Result<NaiveDate> {
    // total - 1 is the zero-based month index; checked so extreme counts
    // surface as DateOutOfRange rather than overflowing.
    let index = i64::from(start.month())
        .checked_add(months)
        .and_then(|total| total.checked_sub(1))
        .ok_or_else(|| out_of_range(start, months, "months"))?;
    let year = i64::from(start.year()) + index.div_euclid(12);
    let month = (index.rem_euclid(12) + 1) as u32;

    let year = i32::try_from(year).map_err(|_| out_of_range(start, months, "months"))?;
    let last_day = days_in_month(year, month);

    let day = if start.day() == 1 {
        1
    } else if start.day() <= last_day {
        start.day() - 1
    } else {
        last_day
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| out_of_range(start, months, "months"))
}

/// Shifts `start` forward by an inclusive day count: the manufacturing day
/// counts as day 1, so the result is `start + (days - 1)`.
pub fn shift_by_days(start: NaiveDate, days: i64) -> Result<NaiveDate> {
    if days <= 0 {
        return Err(StampError::NonPositiveDuration { days });
    }

    start
        .checked_add_days(Days::new((days - 1) as u64))
        .ok_or_else(|| out_of_range(start, days, "days"))
}

/// Gregorian leap-year rule: divisible by 4, except centuries, except
/// multiples of 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given year/month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        // month is normalized to 1..=12 before this is called; keep the
        // function total anyway
        _ => 30,
    }
}

fn out_of_range(start: NaiveDate, amount: i64, unit: &str) -> StampError {
    StampError::DateOutOfRange {
        details: format!("{} + {} {}", start, amount, unit),
    }
}
