use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Inclusive month range with both bounds pinned to the first day of their
/// month and `to >= from`. Produced by [`resolve_range`], never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Shift `date` by `months` whole months and snap to the first day of the
/// resulting month.
///
/// The day component is discarded on purpose: day arithmetic is not well
/// defined across months of different lengths (there is no October 31st plus
/// four months). Year rollover is computed with Euclidean division on a
/// zero-based month index, so negative and multi-year deltas behave the same
/// as small positive ones. Total for every representable input; at the edges
/// of the calendar range supported by `chrono` the result saturates.
#[must_use]
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = (month_index(date) + i64::from(months))
        .clamp(month_index(NaiveDate::MIN), month_index(NaiveDate::MAX));

    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12);

    i32::try_from(year)
        .ok()
        .and_then(|year| u32::try_from(month0 + 1).ok().map(|month| (year, month)))
        .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .unwrap_or(date)
}

/// Zero-based month counted from year 0.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Parse a `YYYY-MM` string into the first day of that month.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] carrying the offending input when the string
/// is not exactly two `-`-separated integer fields with the month in 1-12.
/// This is a fatal, user-facing condition; it surfaces before any database
/// interaction.
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    input
        .split_once('-')
        .and_then(|(year, month)| {
            let year = year.parse::<i32>().ok()?;
            let month = month.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        })
        .ok_or_else(|| Error::DateFormat(input.to_string()))
}

/// Resolve the month range a command operates on.
///
/// Absent `from` defaults to `today` shifted by `default_offset` months (+1
/// for partition creation, -6 for deletion). Absent `to` defaults to the
/// resolved `from`. A `to` that precedes `from` is silently clamped up to
/// `from`, collapsing the range to a single month rather than rejecting it.
#[must_use]
pub fn resolve_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
    default_offset: i32,
) -> DateRange {
    let from = from.unwrap_or_else(|| shift_months(today, default_offset));
    let to = to.unwrap_or(from).max(from);

    DateRange { from, to }
}
