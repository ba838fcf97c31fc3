/// First Gregorian year accepted for conversion (inclusive)
pub const GREGORIAN_MIN_YEAR: u16 = 1944;
/// Last Gregorian year accepted for conversion (inclusive)
pub const GREGORIAN_MAX_YEAR: u16 = 2042;

/// First Bikram Sambat year accepted for conversion (inclusive)
pub const SAMBAT_MIN_YEAR: u16 = 2000;
/// Last Bikram Sambat year accepted for conversion (inclusive)
pub const SAMBAT_MAX_YEAR: u16 = 2098;

/// First year of the Bikram Sambat table; record index 0
pub const SAMBAT_EPOCH_YEAR: u16 = 2000;
/// Number of tabulated Bikram Sambat years (2000..=2099)
pub const SAMBAT_TABLE_YEARS: usize = 100;

/// Maximum valid month (December / Chaitra)
pub const MAX_MONTH: u8 = 12;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Upper bound on a Gregorian day regardless of month
pub const GREGORIAN_MAX_DAY: u8 = 31;

/// Gregorian date paired with [`SAMBAT_ANCHOR`] for the forward walk
pub const GREGORIAN_ANCHOR: (u16, u8, u8) = (1943, 4, 14);
/// Bikram Sambat start of table, equal to 1943-04-14
pub const SAMBAT_ANCHOR: (u16, u8, u8) = (2000, 1, 1);

/// Bikram Sambat date paired with [`REVERSE_GREGORIAN_ANCHOR`] for the reverse walk
pub const REVERSE_SAMBAT_ANCHOR: (u16, u8, u8) = (2000, 9, 17);
/// Gregorian date equal to 2000-09-17 BS
pub const REVERSE_GREGORIAN_ANCHOR: (u16, u8, u8) = (1944, 1, 1);

/// Days in each Gregorian month of a common year
pub const GREGORIAN_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// Days in each Gregorian month of a leap year
pub const GREGORIAN_LEAP_MONTH_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a common Gregorian year
pub const DAYS_IN_YEAR: u32 = 365;
/// Days in a leap Gregorian year
pub const DAYS_IN_LEAP_YEAR: u32 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
