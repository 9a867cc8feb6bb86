//! Error types for sign resolution and birth-date validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from zodiac lookups and birth-date handling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ZodiacError {
    /// Sign name is not one of the twelve zodiac signs.
    UnknownSign(String),
    /// Birth date text is not an ISO-8601 date or RFC 3339 timestamp.
    InvalidDateFormat(String),
    /// Month/day pair matched none of the twelve sign ranges.
    UnresolvableDate { month: u32, day: u32 },
    /// Birth date lies after the reference day.
    FutureDate,
    /// Age is below the configured minimum.
    TooYoung { age: i32, min: u32 },
    /// Age is above the configured maximum.
    TooOld { age: i32, max: u32 },
}

impl Display for ZodiacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSign(name) => write!(f, "unknown zodiac sign: {name:?}"),
            Self::InvalidDateFormat(text) => write!(f, "invalid date format: {text:?}"),
            Self::UnresolvableDate { month, day } => {
                write!(f, "no zodiac sign covers month {month}, day {day}")
            }
            Self::FutureDate => write!(f, "birth date cannot be in the future"),
            Self::TooYoung { age, min } => {
                write!(f, "must be at least {min} years old (age {age})")
            }
            Self::TooOld { age, max } => {
                write!(f, "invalid birth date: age {age} exceeds {max}")
            }
        }
    }
}

impl Error for ZodiacError {}
