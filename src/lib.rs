//! Conversion between Gregorian and Bikram Sambat dates.
//!
//! Bikram Sambat month lengths vary from year to year and are taken from a
//! published table covering 2000..=2099 BS. Conversions are accepted for
//! 1944..=2042 AD and 2000..=2098 BS.
//!
//! ```
//! use sambat::{GregorianDate, gregorian_to_sambat, sambat_to_gregorian};
//!
//! assert_eq!(gregorian_to_sambat(2023, 1, 15), Ok((2079, 10, 1)));
//! assert_eq!(sambat_to_gregorian(2079, 10, 1), Ok((2023, 1, 15)));
//!
//! let date: GregorianDate = "2023-01-15".parse().unwrap();
//! assert_eq!(date.to_sambat().unwrap().to_string(), "2079-10-01");
//! ```

mod consts;
mod convert;
mod distance;
mod prelude;
mod table;
mod types;
mod validate;

pub use consts::*;
pub use convert::{gregorian_to_sambat, sambat_to_gregorian};
pub use distance::{day_count, days_between};
pub use table::{
    YearRecord, gregorian_month_lengths, is_leap_year, month_length, year_record, year_total_days,
};
pub use types::{GregorianDate, SambatDate};
pub use validate::{is_valid_gregorian, is_valid_sambat};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// The two calendars this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Proleptic Gregorian calendar (AD)
    #[display(fmt = "Gregorian")]
    Gregorian,
    /// Bikram Sambat (BS)
    #[display(fmt = "Bikram Sambat")]
    Sambat,
}

/// A date that lies outside the supported range of its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Date is out of range: {year:04}-{month:02}-{day:02} ({calendar})")]
pub struct DateOutOfRange {
    calendar: Calendar,
    year:     u16,
    month:    u8,
    day:      u8,
}

impl DateOutOfRange {
    pub(crate) const fn new(calendar: Calendar, year: u16, month: u8, day: u8) -> Self {
        Self {
            calendar,
            year,
            month,
            day,
        }
    }

    /// Calendar the rejected date belongs to
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The rejected date as `(year, month, day)`
    pub const fn date(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "{_0}")]
    OutOfRange(DateOutOfRange),
}

impl std::error::Error for ParseError {}

impl From<DateOutOfRange> for ParseError {
    fn from(err: DateOutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}
