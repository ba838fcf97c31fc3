use tracing::{debug, trace};

use crate::consts::{
    DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, GREGORIAN_ANCHOR, GREGORIAN_MAX_YEAR, MAX_MONTH,
    REVERSE_GREGORIAN_ANCHOR, REVERSE_SAMBAT_ANCHOR, SAMBAT_ANCHOR,
};
use crate::{Calendar, DateOutOfRange, distance, table, validate};

/// Converts a Gregorian date to Bikram Sambat.
///
/// Accepts years `1944..=2042` and any day in `1..=31`. Dates from
/// 2042-04-14 onward land in 2099 BS, which [`sambat_to_gregorian`] does not
/// accept back.
///
/// # Errors
/// Returns `DateOutOfRange` if the date fails validation.
pub fn gregorian_to_sambat(year: u16, month: u8, day: u8) -> Result<(u16, u8, u8), DateOutOfRange> {
    validate::check(Calendar::Gregorian, year, month, day)?;

    let diff = distance::days_between(Calendar::Gregorian, (year, month, day), GREGORIAN_ANCHOR)?;
    let sambat = walk_sambat(diff)
        .ok_or_else(|| DateOutOfRange::new(Calendar::Gregorian, year, month, day))?;

    debug!(input = ?(year, month, day), output = ?sambat, "converted Gregorian to Bikram Sambat");
    Ok(sambat)
}

/// Converts a Bikram Sambat date to Gregorian.
///
/// Distance is measured from 2000-09-17 BS in either direction, so dates
/// before it mirror onto dates after 1944-01-01.
///
/// # Errors
/// Returns `DateOutOfRange` if the date fails validation.
pub fn sambat_to_gregorian(year: u16, month: u8, day: u8) -> Result<(u16, u8, u8), DateOutOfRange> {
    validate::check(Calendar::Sambat, year, month, day)?;

    let diff = distance::days_between(Calendar::Sambat, (year, month, day), REVERSE_SAMBAT_ANCHOR)?;
    let gregorian = walk_gregorian(diff)
        .ok_or_else(|| DateOutOfRange::new(Calendar::Sambat, year, month, day))?;

    debug!(input = ?(year, month, day), output = ?gregorian, "converted Bikram Sambat to Gregorian");
    Ok(gregorian)
}

/// Walks `diff` days forward from 2000-01-01 BS.
///
/// Whole years are consumed while `diff` covers the current year, then whole
/// months, and the remainder becomes the day offset. `None` if the walk runs
/// off the end of the table.
fn walk_sambat(mut diff: u32) -> Option<(u16, u8, u8)> {
    let (mut year, _, first_day) = SAMBAT_ANCHOR;
    let mut record = table::year_record(year)?;
    while diff >= u32::from(record.total_days()) {
        diff -= u32::from(record.total_days());
        year += 1;
        record = table::year_record(year)?;
    }
    trace!(year, diff, "consumed whole Bikram Sambat years");

    let (month, diff) = walk_months(record.months(), diff)?;
    Some((year, month, first_day + u8::try_from(diff).ok()?))
}

/// Walks `diff` days forward from 1944-01-01.
fn walk_gregorian(mut diff: u32) -> Option<(u16, u8, u8)> {
    let (mut year, _, first_day) = REVERSE_GREGORIAN_ANCHOR;
    loop {
        let year_days = if table::is_leap_year(year) { DAYS_IN_LEAP_YEAR } else { DAYS_IN_YEAR };
        if diff < year_days {
            break;
        }
        diff -= year_days;
        year += 1;
        if year > GREGORIAN_MAX_YEAR {
            return None;
        }
    }
    trace!(year, diff, "consumed whole Gregorian years");

    let (month, diff) = walk_months(table::gregorian_month_lengths(year), diff)?;
    Some((year, month, first_day + u8::try_from(diff).ok()?))
}

/// Consumes whole months from `diff`, returning the month reached and the days left over.
fn walk_months(months: &[u8; 12], mut diff: u32) -> Option<(u8, u32)> {
    for (month, &days) in (1..=MAX_MONTH).zip(months) {
        if diff < u32::from(days) {
            return Some((month, diff));
        }
        diff -= u32::from(days);
    }
    None
}
