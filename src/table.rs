//! Tabulated Bikram Sambat month lengths and the Gregorian month rule.
//!
//! Bikram Sambat months are not computable from a closed formula, so every
//! supported year carries its observed month lengths. Index 0 is 2000 BS,
//! which begins on 1943-04-14.

use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, GREGORIAN_LEAP_MONTH_DAYS, GREGORIAN_MAX_YEAR,
    GREGORIAN_MIN_YEAR, GREGORIAN_MONTH_DAYS, LEAP_YEAR_CYCLE, MIN_DAY, SAMBAT_EPOCH_YEAR,
    SAMBAT_TABLE_YEARS,
};
use crate::{Calendar, DateOutOfRange};

/// Month lengths of a single Bikram Sambat year, Baisakh through Chaitra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRecord {
    months:     [u8; 12],
    total_days: u16,
}

impl YearRecord {
    const fn new(months: [u8; 12], total_days: u16) -> Self {
        Self { months, total_days }
    }

    /// Days in each month of the year
    #[inline]
    pub const fn months(&self) -> &[u8; 12] {
        &self.months
    }

    /// Declared length of the year.
    ///
    /// Equal to the sum of [`Self::months`]. 2096 BS is 364 days long.
    #[inline]
    pub const fn total_days(&self) -> u16 {
        self.total_days
    }
}

static SAMBAT_YEARS: [YearRecord; SAMBAT_TABLE_YEARS] = [
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365), // 2000
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2001
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2002
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2003
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365), // 2004
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2005
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2006
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2007
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365), // 2008
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2009
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2010
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2011
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365), // 2012
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2013
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2014
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2015
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365), // 2016
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2017
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2018
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366), // 2019
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2020
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2021
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365), // 2022
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366), // 2023
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2024
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2025
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2026
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365), // 2027
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2028
    YearRecord::new([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365), // 2029
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2030
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365), // 2031
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2032
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2033
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2034
    YearRecord::new([30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365), // 2035
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2036
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2037
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2038
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365), // 2039
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2040
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2041
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2042
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365), // 2043
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2044
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2045
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2046
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2047
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2048
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365), // 2049
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366), // 2050
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2051
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2052
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365), // 2053
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366), // 2054
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2055
    YearRecord::new([31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], 365), // 2056
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2057
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 365), // 2058
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2059
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2060
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2061
    YearRecord::new([30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], 365), // 2062
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2063
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2064
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2065
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], 365), // 2066
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2067
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2068
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2069
    YearRecord::new([31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], 365), // 2070
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2071
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], 365), // 2072
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], 366), // 2073
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2074
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2075
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365), // 2076
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], 366), // 2077
    YearRecord::new([31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2078
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], 365), // 2079
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], 365), // 2080
    YearRecord::new([31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], 366), // 2081
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2082
    YearRecord::new([31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2083
    YearRecord::new([31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2084
    YearRecord::new([31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], 366), // 2085
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2086
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], 366), // 2087
    YearRecord::new([30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], 365), // 2088
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2089
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2090
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], 366), // 2091
    YearRecord::new([30, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2092
    YearRecord::new([30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2093
    YearRecord::new([31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], 365), // 2094
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30], 366), // 2095
    YearRecord::new([30, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], 364), // 2096
    YearRecord::new([31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], 366), // 2097
    YearRecord::new([31, 31, 32, 31, 31, 31, 29, 30, 29, 30, 29, 31], 365), // 2098
    YearRecord::new([31, 31, 32, 31, 31, 31, 30, 29, 29, 30, 30, 30], 365), // 2099
];

/// Returns the record for a Bikram Sambat year, or `None` if it is not tabulated.
pub fn year_record(year: u16) -> Option<&'static YearRecord> {
    let index = year.checked_sub(SAMBAT_EPOCH_YEAR)?;
    SAMBAT_YEARS.get(usize::from(index))
}

/// Records for every tabulated year before `year`, in order.
pub(crate) fn records_before(year: u16) -> Option<&'static [YearRecord]> {
    let index = year.checked_sub(SAMBAT_EPOCH_YEAR)?;
    SAMBAT_YEARS.get(..usize::from(index))
}

/// Gregorian leap rule, applied proleptically.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Gregorian month lengths for `year`, with February adjusted for leap years.
pub const fn gregorian_month_lengths(year: u16) -> &'static [u8; 12] {
    if is_leap_year(year) {
        &GREGORIAN_LEAP_MONTH_DAYS
    } else {
        &GREGORIAN_MONTH_DAYS
    }
}

/// Days in `month` of `year` for the given calendar.
///
/// # Errors
/// Returns `DateOutOfRange` if the year is outside the calendar's supported
/// span or the month is not in `1..=12`. The error reports the first day of
/// the requested month.
pub fn month_length(calendar: Calendar, year: u16, month: u8) -> Result<u8, DateOutOfRange> {
    let out_of_range = || DateOutOfRange::new(calendar, year, month, MIN_DAY);

    let months = match calendar {
        Calendar::Gregorian if (GREGORIAN_MIN_YEAR..=GREGORIAN_MAX_YEAR).contains(&year) => {
            gregorian_month_lengths(year)
        },
        Calendar::Gregorian => return Err(out_of_range()),
        Calendar::Sambat => year_record(year).ok_or_else(out_of_range)?.months(),
    };

    let index = month.checked_sub(1).ok_or_else(out_of_range)?;
    months.get(usize::from(index)).copied().ok_or_else(out_of_range)
}

/// Total days in a Bikram Sambat year.
///
/// # Errors
/// Returns `DateOutOfRange` if the year is not tabulated.
pub fn year_total_days(year: u16) -> Result<u16, DateOutOfRange> {
    year_record(year)
        .map(YearRecord::total_days)
        .ok_or_else(|| DateOutOfRange::new(Calendar::Sambat, year, 1, MIN_DAY))
}
