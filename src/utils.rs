/// Common calendar functions.
use crate::field::FieldValue;
use chrono::{Datelike, NaiveDate};

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month.
pub(crate) fn days_in_month(year: i32, month: FieldValue) -> FieldValue {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

/// Day of week of the specified date, Sunday is `0`.
///
/// Returns `None` if the date doesn't exist or can't be represented.
pub(crate) fn day_of_week(year: i32, month: FieldValue, day: FieldValue) -> Option<FieldValue> {
    NaiveDate::from_ymd_opt(year, month.into(), day.into())
        .map(|date| date.weekday().num_days_from_sunday() as FieldValue)
}
