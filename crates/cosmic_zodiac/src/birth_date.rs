//! Birth-date parsing, age computation and validation rules.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::ZodiacError;

/// Age limits applied by [`validate_birth_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateRules {
    /// Minimum accepted age in whole years. Default: 18.
    pub min_age: u32,
    /// Maximum accepted age in whole years. Default: 120.
    pub max_age: u32,
}

impl Default for BirthDateRules {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 120,
        }
    }
}

/// Parse a birth date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// For timestamps the calendar date in the timestamp's own offset is used.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, ZodiacError> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ZodiacError::InvalidDateFormat(text.to_string()))
}

/// Age in whole years on `today`. Negative for future birth dates.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validate a birth date against `rules`, returning the age on `today`.
///
/// Checks run in order: in the future, too young, too old.
pub fn validate_birth_date(
    birth: NaiveDate,
    today: NaiveDate,
    rules: &BirthDateRules,
) -> Result<u32, ZodiacError> {
    if birth > today {
        return Err(ZodiacError::FutureDate);
    }
    // non-negative once the future check has passed
    let age = age_on(birth, today);
    if i64::from(age) < i64::from(rules.min_age) {
        return Err(ZodiacError::TooYoung {
            age,
            min: rules.min_age,
        });
    }
    if i64::from(age) > i64::from(rules.max_age) {
        return Err(ZodiacError::TooOld {
            age,
            max: rules.max_age,
        });
    }
    Ok(age.unsigned_abs())
}

/// Long US display form, e.g. `July 10, 1995`.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
