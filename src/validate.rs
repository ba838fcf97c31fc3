use tracing::debug;

use crate::consts::{
    GREGORIAN_MAX_DAY, GREGORIAN_MAX_YEAR, GREGORIAN_MIN_YEAR, MAX_MONTH, MIN_DAY,
    SAMBAT_MAX_YEAR, SAMBAT_MIN_YEAR,
};
use crate::{Calendar, DateOutOfRange, table};

/// Checks a Gregorian date against the supported range.
///
/// Only the year and month ranges are enforced; any day in `1..=31` passes,
/// so `2000-02-30` is accepted and converts as if it were `2000-03-01`.
pub const fn is_valid_gregorian(year: u16, month: u8, day: u8) -> bool {
    year >= GREGORIAN_MIN_YEAR
        && year <= GREGORIAN_MAX_YEAR
        && month >= 1
        && month <= MAX_MONTH
        && day >= MIN_DAY
        && day <= GREGORIAN_MAX_DAY
}

/// Checks a Bikram Sambat date against the supported range and the tabulated
/// length of its month.
pub fn is_valid_sambat(year: u16, month: u8, day: u8) -> bool {
    if !(SAMBAT_MIN_YEAR..=SAMBAT_MAX_YEAR).contains(&year) {
        return false;
    }
    matches!(
        table::month_length(Calendar::Sambat, year, month),
        Ok(days) if (MIN_DAY..=days).contains(&day)
    )
}

/// Validates a date for `calendar`, turning a rejection into an error.
///
/// # Errors
/// Returns `DateOutOfRange` carrying the rejected date.
pub(crate) fn check(calendar: Calendar, year: u16, month: u8, day: u8) -> Result<(), DateOutOfRange> {
    let valid = match calendar {
        Calendar::Gregorian => is_valid_gregorian(year, month, day),
        Calendar::Sambat => is_valid_sambat(year, month, day),
    };
    if valid {
        Ok(())
    } else {
        debug!(%calendar, year, month, day, "rejected date outside supported range");
        Err(DateOutOfRange::new(calendar, year, month, day))
    }
}
