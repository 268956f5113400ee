//! Section date inference.
//!
//! Schedule pages label each day as "weekday + day-of-month" without a month
//! or year. The month is recovered by looking at the calendar months around
//! the reference date.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use tracing::instrument;

/// Returns the first day of the month `offset` months away from `today`.
fn month_start(today: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let first = today.with_day(1)?;
    let months = Months::new(offset.unsigned_abs());
    if offset < 0 {
        first.checked_sub_months(months)
    } else {
        first.checked_add_months(months)
    }
}

/// Resolves the calendar date of a section header.
///
/// Candidates are `target_day` in the previous, current and next month of
/// `today`; days that do not exist in a month are skipped. Among candidates
/// that fall on `target_weekday` the one nearest to `today` wins, earlier
/// months first on ties.
///
/// When no candidate falls on `target_weekday` the weekday is ignored and
/// `target_day` of the current month is returned, or `today` itself when
/// that day does not exist.
#[must_use]
#[instrument(level = "debug", skip(today), fields(%today))]
pub fn resolve_section_date(target_weekday: Weekday, target_day: u32, today: NaiveDate) -> NaiveDate {
    let nearest = [-1, 0, 1]
        .into_iter()
        .filter_map(|offset| month_start(today, offset)?.with_day(target_day))
        .filter(|candidate| candidate.weekday() == target_weekday)
        .min_by_key(|candidate| candidate.signed_duration_since(today).num_days().abs());

    if let Some(date) = nearest {
        return date;
    }

    tracing::warn!(
        weekday = %target_weekday,
        day = target_day,
        "no nearby month matches the section weekday, ignoring weekday"
    );
    today.with_day(target_day).unwrap_or(today)
}
