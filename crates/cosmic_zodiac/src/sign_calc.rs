//! Sign calculation from a calendar birth date.
//!
//! Twelve inclusive month/day ranges, each straddling a month boundary,
//! partition the calendar year. The year component is ignored. Ranges are
//! tested in zodiac order; the first match wins.
//!
//! There is no fallback sign: a month/day pair outside every range (only
//! possible for an impossible calendar day) is reported as
//! [`ZodiacError::UnresolvableDate`] instead of defaulting to Aries.

use chrono::{Datelike, NaiveDate};

use crate::birth_date::parse_birth_date;
use crate::error::ZodiacError;
use crate::sign::ZodiacSign;

/// Leap year used to validate month/day pairs so that February 29 is accepted.
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// Inclusive date range of a sign: from (`start_month`, `start_day`) to
/// (`end_month`, `end_day`) in the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
    pub sign: ZodiacSign,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SignRange {
    const fn new(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            sign,
            start_month: start.0,
            start_day: start.1,
            end_month: end.0,
            end_day: end.1,
        }
    }

    /// Whether the month/day pair falls in this range.
    pub const fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

/// Sign date ranges in evaluation order.
pub const SIGN_RANGES: [SignRange; 12] = [
    SignRange::new(ZodiacSign::Aries, (3, 21), (4, 19)),
    SignRange::new(ZodiacSign::Taurus, (4, 20), (5, 20)),
    SignRange::new(ZodiacSign::Gemini, (5, 21), (6, 20)),
    SignRange::new(ZodiacSign::Cancer, (6, 21), (7, 22)),
    SignRange::new(ZodiacSign::Leo, (7, 23), (8, 22)),
    SignRange::new(ZodiacSign::Virgo, (8, 23), (9, 22)),
    SignRange::new(ZodiacSign::Libra, (9, 23), (10, 22)),
    SignRange::new(ZodiacSign::Scorpio, (10, 23), (11, 21)),
    SignRange::new(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    SignRange::new(ZodiacSign::Capricorn, (12, 22), (1, 19)),
    SignRange::new(ZodiacSign::Aquarius, (1, 20), (2, 18)),
    SignRange::new(ZodiacSign::Pisces, (2, 19), (3, 20)),
];

/// Resolve the sign for a month (1-12) and day-of-month.
///
/// Rejects pairs that are not a real calendar day in a leap year.
pub fn sign_from_month_day(month: u32, day: u32) -> Result<ZodiacSign, ZodiacError> {
    if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).is_none() {
        return Err(ZodiacError::UnresolvableDate { month, day });
    }
    SIGN_RANGES
        .iter()
        .find(|range| range.contains(month, day))
        .map(|range| range.sign)
        .ok_or(ZodiacError::UnresolvableDate { month, day })
}

/// Resolve the sign for a calendar date. The year is ignored.
pub fn sign_for_date(date: NaiveDate) -> Result<ZodiacSign, ZodiacError> {
    sign_from_month_day(date.month(), date.day())
}

/// Parse an ISO-8601 birth date and resolve its sign.
pub fn sign_for_date_str(text: &str) -> Result<ZodiacSign, ZodiacError> {
    sign_for_date(parse_birth_date(text)?)
}

/// Date range for a sign from [`SIGN_RANGES`].
pub fn sign_range(sign: ZodiacSign) -> &'static SignRange {
    &SIGN_RANGES[sign.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ranges_keyed_by_index() {
        for (i, r) in SIGN_RANGES.iter().enumerate() {
            assert_eq!(r.sign.index() as usize, i);
            assert_eq!(sign_range(r.sign), r);
        }
    }

    #[test]
    fn pisces_aries_boundary() {
        assert_eq!(sign_from_month_day(3, 20), Ok(ZodiacSign::Pisces));
        assert_eq!(sign_from_month_day(3, 21), Ok(ZodiacSign::Aries));
    }

    #[test]
    fn sagittarius_capricorn_boundary() {
        assert_eq!(sign_from_month_day(12, 21), Ok(ZodiacSign::Sagittarius));
        assert_eq!(sign_from_month_day(12, 22), Ok(ZodiacSign::Capricorn));
    }

    #[test]
    fn capricorn_wraps_new_year() {
        assert_eq!(sign_for_date(ymd(1990, 1, 1)), Ok(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date(ymd(1990, 1, 19)), Ok(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date(ymd(1990, 1, 20)), Ok(ZodiacSign::Aquarius));
    }

    #[test]
    fn leap_day_is_pisces() {
        assert_eq!(sign_from_month_day(2, 29), Ok(ZodiacSign::Pisces));
    }

    #[test]
    fn impossible_days_are_errors() {
        assert_eq!(
            sign_from_month_day(4, 31),
            Err(ZodiacError::UnresolvableDate { month: 4, day: 31 })
        );
        assert_eq!(
            sign_from_month_day(13, 1),
            Err(ZodiacError::UnresolvableDate { month: 13, day: 1 })
        );
        assert!(sign_from_month_day(1, 0).is_err());
    }

    #[test]
    fn year_is_ignored() {
        for year in [1900, 1995, 2024] {
            assert_eq!(sign_for_date(ymd(year, 7, 10)), Ok(ZodiacSign::Cancer));
        }
    }

    #[test]
    fn from_str_input() {
        assert_eq!(sign_for_date_str("1995-07-10"), Ok(ZodiacSign::Cancer));
        assert!(sign_for_date_str("not a date").is_err());
    }
}
