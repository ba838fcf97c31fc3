use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DATE_SEPARATOR;
use crate::prelude::*;
use crate::{Calendar, DateOutOfRange, ParseError, convert, validate};

/// A Gregorian date inside the convertible range (1944..=2042).
///
/// Validation bounds the day by 31 only, matching [`crate::is_valid_gregorian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

/// A Bikram Sambat date inside the convertible range (2000..=2098).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct SambatDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the date is outside the convertible range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateOutOfRange> {
        validate::check(Calendar::Gregorian, year, month, day)?;
        Ok(Self { year, month, day })
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

    /// Converts to the equivalent Bikram Sambat date.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` for dates from 2042-04-14 onward, whose
    /// equivalent falls in 2099 BS.
    pub fn to_sambat(self) -> Result<SambatDate, DateOutOfRange> {
        let (year, month, day) = convert::gregorian_to_sambat(self.year, self.month, self.day)?;
        SambatDate::new(year, month, day)
    }
}

impl SambatDate {
    /// Creates a new Bikram Sambat date, checking the day against the tabulated month length
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the date is outside the convertible range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateOutOfRange> {
        validate::check(Calendar::Sambat, year, month, day)?;
        Ok(Self { year, month, day })
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

    /// Converts to the equivalent Gregorian date.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if no Gregorian date in range corresponds.
    pub fn to_gregorian(self) -> Result<GregorianDate, DateOutOfRange> {
        let (year, month, day) = convert::sambat_to_gregorian(self.year, self.month, self.day)?;
        GregorianDate::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = DateOutOfRange;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for SambatDate {
    type Error = DateOutOfRange;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

/// Splits `YYYY-MM-DD` into its numeric components without range checks.
fn parse_ymd(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} '{DATE_SEPARATOR}' separators",
            parts.len() - 1
        )));
    };

    let year = year
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;
    Ok((year, month, day))
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl FromStr for SambatDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for SambatDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SambatDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_new_valid() {
        let date = GregorianDate::new(2023, 1, 15).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_gregorian_new_invalid() {
        let err = GregorianDate::new(1943, 12, 31).unwrap_err();
        assert_eq!(err, DateOutOfRange::new(Calendar::Gregorian, 1943, 12, 31));
        assert!(GregorianDate::new(2043, 1, 1).is_err());
        assert!(GregorianDate::new(2000, 1, 32).is_err());
    }

    #[test]
    fn test_sambat_new_checks_month_length() {
        assert!(SambatDate::new(2000, 1, 30).is_ok());
        let err = SambatDate::new(2000, 1, 31).unwrap_err();
        assert_eq!(err.calendar(), Calendar::Sambat);
        assert!(SambatDate::new(2099, 1, 1).is_err());
    }

    #[test]
    fn test_conversion_methods() {
        let gregorian = GregorianDate::new(2023, 1, 15).unwrap();
        let sambat = gregorian.to_sambat().unwrap();
        assert_eq!(sambat, SambatDate::new(2079, 10, 1).unwrap());
        assert_eq!(sambat.to_gregorian().unwrap(), gregorian);
    }

    #[test]
    fn test_to_sambat_beyond_converter_range() {
        // 2042-05-01 is 2099-01-18 BS, which is tabulated but not a valid SambatDate
        let date = GregorianDate::new(2042, 5, 1).unwrap();
        let err = date.to_sambat().unwrap_err();
        assert_eq!(err, DateOutOfRange::new(Calendar::Sambat, 2099, 1, 18));
    }

    #[test]
    fn test_display() {
        assert_eq!(GregorianDate::new(1944, 1, 1).unwrap().to_string(), "1944-01-01");
        assert_eq!(SambatDate::new(2079, 10, 1).unwrap().to_string(), "2079-10-01");
    }

    #[test]
    fn test_parse() {
        let date = "2023-01-15".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2023, 1, 15).unwrap());

        let date = " 2079 - 10 - 1 ".parse::<SambatDate>().unwrap();
        assert_eq!(date, SambatDate::new(2079, 10, 1).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<SambatDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("2023-01".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("2023-01-15-01".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("2023/01/15".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!("2023-XX-15".parse::<GregorianDate>(), Err(ParseError::InvalidFormat(_))));

        let result = "2000-01-31".parse::<SambatDate>();
        assert_eq!(
            result,
            Err(ParseError::OutOfRange(DateOutOfRange::new(Calendar::Sambat, 2000, 1, 31)))
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = GregorianDate::new(2023, 12, 31).unwrap();
        let b = GregorianDate::new(2024, 1, 1).unwrap();
        let c = GregorianDate::new(2024, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);

        let a = SambatDate::new(2080, 12, 30).unwrap();
        let b = SambatDate::new(2081, 1, 1).unwrap();
        assert!(a < b);
        assert!(a.to_gregorian().unwrap() < b.to_gregorian().unwrap());
    }

    #[test]
    fn test_tuple_conversions() {
        let date: GregorianDate = (2023, 1, 15).try_into().unwrap();
        let tuple: (u16, u8, u8) = date.into();
        assert_eq!(tuple, (2023, 1, 15));

        let date: SambatDate = (2079, 10, 1).try_into().unwrap();
        let tuple: (u16, u8, u8) = date.into();
        assert_eq!(tuple, (2079, 10, 1));

        let result: Result<SambatDate, _> = (1999, 1, 1).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let date = GregorianDate::new(2023, 1, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2023-01-15""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let date = SambatDate::new(2079, 10, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2079-10-01""#);
        let parsed: SambatDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<GregorianDate, _> = serde_json::from_str(r#""1943-04-14""#);
        assert!(result.is_err());

        let result: Result<SambatDate, _> = serde_json::from_str(r#""2000-01-31""#);
        assert!(result.is_err());

        let result: Result<SambatDate, _> = serde_json::from_str(r#""2000-02-32""#);
        assert!(result.is_ok());
    }
}
