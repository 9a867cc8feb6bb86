//! Zodiac reference data and sign calculation for Cosmic Connections.
//!
//! This crate provides:
//! - The twelve signs with element, quality and ruling-planet classification
//! - The static per-sign reference table (glyph, colour, traits, date range)
//! - Sign resolution from a calendar birth date
//! - Birth-date parsing, age computation and validation rules
//!
//! Everything here is immutable static data or pure functions.

pub mod birth_date;
pub mod elements;
pub mod error;
pub mod sign;
pub mod sign_calc;
pub mod zodiac_info;

pub use birth_date::{
    BirthDateRules, age_on, format_birth_date, parse_birth_date, validate_birth_date,
};
pub use elements::{ALL_ELEMENTS, ALL_PLANETS, ALL_QUALITIES, Element, Planet, Quality};
pub use error::ZodiacError;
pub use sign::{ALL_SIGNS, ZodiacSign};
pub use sign_calc::{
    SIGN_RANGES, SignRange, sign_for_date, sign_for_date_str, sign_from_month_day, sign_range,
};
pub use zodiac_info::{ZodiacInfo, best_matches, zodiac_info};
