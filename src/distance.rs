//! Day counts within a single calendar.
//!
//! Both calendars count from their own zero point, so counts are only
//! comparable when taken in the same calendar.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_YEAR, GREGORIAN_CYCLE, GREGORIAN_MONTH_DAYS, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::{Calendar, DateOutOfRange, table};

/// Days since the Gregorian zero point (0000-01-01).
///
/// Months before `month` are always summed from the common-year table; leap
/// days are added separately from the count of leap years up to `year`
/// (or `year - 1` for January and February).
pub(crate) fn gregorian_day_count(year: u16, month: u8, day: u8) -> u32 {
    let before_month: u32 = GREGORIAN_MONTH_DAYS
        .iter()
        .take(usize::from(month.saturating_sub(1)))
        .map(|&days| u32::from(days))
        .sum();

    let leap_year = if month <= 2 { year.saturating_sub(1) } else { year };
    let leap_days = u32::from(leap_year / LEAP_YEAR_CYCLE) - u32::from(leap_year / CENTURY_CYCLE)
        + u32::from(leap_year / GREGORIAN_CYCLE);

    u32::from(year) * DAYS_IN_YEAR + u32::from(day) + before_month + leap_days
}

/// Days since 2000-01-01 BS, or `None` if the date cannot be located in the table.
pub(crate) fn sambat_day_count(year: u16, month: u8, day: u8) -> Option<u32> {
    if !(1..=MAX_MONTH).contains(&month) {
        return None;
    }
    let record = table::year_record(year)?;

    let before_month: u32 = record
        .months()
        .iter()
        .take(usize::from(month - 1))
        .map(|&days| u32::from(days))
        .sum();
    let before_year: u32 = table::records_before(year)?
        .iter()
        .map(|record| u32::from(record.total_days()))
        .sum();

    Some(u32::from(day.checked_sub(1)?) + before_month + before_year)
}

/// Day count of `date` in `calendar`.
///
/// # Errors
/// Returns `DateOutOfRange` for a Bikram Sambat date whose year is not
/// tabulated, whose month is not in `1..=12`, or whose day is zero.
/// Gregorian counts always succeed.
pub fn day_count(calendar: Calendar, date: (u16, u8, u8)) -> Result<u32, DateOutOfRange> {
    let (year, month, day) = date;
    match calendar {
        Calendar::Gregorian => Ok(gregorian_day_count(year, month, day)),
        Calendar::Sambat => sambat_day_count(year, month, day)
            .ok_or_else(|| DateOutOfRange::new(calendar, year, month, day)),
    }
}

/// Absolute number of days between two dates of the same calendar.
///
/// # Errors
/// Returns `DateOutOfRange` if either date cannot be counted, see [`day_count`].
pub fn days_between(
    calendar: Calendar,
    a: (u16, u8, u8),
    b: (u16, u8, u8),
) -> Result<u32, DateOutOfRange> {
    Ok(day_count(calendar, a)?.abs_diff(day_count(calendar, b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GREGORIAN_ANCHOR, REVERSE_GREGORIAN_ANCHOR, REVERSE_SAMBAT_ANCHOR, SAMBAT_ANCHOR};

    #[test]
    fn test_gregorian_day_count_known_values() {
        assert_eq!(gregorian_day_count(1943, 4, 14), 709_769);
        assert_eq!(gregorian_day_count(1944, 1, 1), 710_031);
        assert_eq!(gregorian_day_count(2000, 1, 1), 730_485);
    }

    #[test]
    fn test_gregorian_leap_day_is_counted() {
        // 2000 is a leap year, 1900 is not
        assert_eq!(days_between(Calendar::Gregorian, (2000, 2, 28), (2000, 3, 1)).unwrap(), 2);
        assert_eq!(days_between(Calendar::Gregorian, (1900, 2, 28), (1900, 3, 1)).unwrap(), 1);
        assert_eq!(days_between(Calendar::Gregorian, (2024, 1, 1), (2025, 1, 1)).unwrap(), 366);
        assert_eq!(days_between(Calendar::Gregorian, (2023, 1, 1), (2024, 1, 1)).unwrap(), 365);
    }

    #[test]
    fn test_gregorian_overflowing_day_folds_into_next_month() {
        assert_eq!(gregorian_day_count(2000, 2, 30), gregorian_day_count(2000, 3, 1));
        assert_eq!(gregorian_day_count(2023, 4, 31), gregorian_day_count(2023, 5, 1));
    }

    #[test]
    fn test_sambat_day_count_known_values() {
        assert_eq!(sambat_day_count(2000, 1, 1), Some(0));
        assert_eq!(sambat_day_count(2000, 9, 17), Some(262));
        assert_eq!(sambat_day_count(2001, 1, 1), Some(365));
    }

    #[test]
    fn test_sambat_short_year() {
        assert_eq!(days_between(Calendar::Sambat, (2096, 1, 1), (2097, 1, 1)).unwrap(), 364);
    }

    #[test]
    fn test_sambat_day_count_rejects_untabulated() {
        assert_eq!(sambat_day_count(1999, 12, 30), None);
        assert_eq!(sambat_day_count(2100, 1, 1), None);
        assert_eq!(sambat_day_count(2050, 0, 1), None);
        assert_eq!(sambat_day_count(2050, 13, 1), None);
        assert_eq!(sambat_day_count(2050, 1, 0), None);

        let err = day_count(Calendar::Sambat, (2100, 1, 1)).unwrap_err();
        assert_eq!(err.calendar(), Calendar::Sambat);
        assert_eq!(err.date(), (2100, 1, 1));
    }

    #[test]
    fn test_anchors_are_equally_far_from_their_epochs() {
        let gregorian = days_between(Calendar::Gregorian, REVERSE_GREGORIAN_ANCHOR, GREGORIAN_ANCHOR).unwrap();
        let sambat = days_between(Calendar::Sambat, REVERSE_SAMBAT_ANCHOR, SAMBAT_ANCHOR).unwrap();
        assert_eq!(gregorian, 262);
        assert_eq!(sambat, 262);
    }

    #[test]
    fn test_days_between_is_symmetric() {
        let pairs = [
            ((1944, 1, 1), (2042, 12, 31)),
            ((2023, 1, 15), (1943, 4, 14)),
            ((2000, 2, 29), (2000, 3, 1)),
        ];
        for (a, b) in pairs {
            assert_eq!(
                days_between(Calendar::Gregorian, a, b).unwrap(),
                days_between(Calendar::Gregorian, b, a).unwrap()
            );
        }

        let a = (2079, 10, 1);
        let b = (2000, 9, 17);
        assert_eq!(
            days_between(Calendar::Sambat, a, b).unwrap(),
            days_between(Calendar::Sambat, b, a).unwrap()
        );
        assert_eq!(days_between(Calendar::Sambat, a, a).unwrap(), 0);
    }

    #[test]
    fn test_same_span_in_both_calendars() {
        // 2023-01-15 AD is 2079-10-01 BS
        let gregorian = days_between(Calendar::Gregorian, (2023, 1, 15), (1944, 1, 1)).unwrap();
        let sambat = days_between(Calendar::Sambat, (2079, 10, 1), (2000, 9, 17)).unwrap();
        assert_eq!(gregorian, 28_869);
        assert_eq!(gregorian, sambat);
    }
}
