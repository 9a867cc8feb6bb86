//! Error types for the request boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cosmic_zodiac::ZodiacError;

/// Errors surfaced to API callers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ApiError {
    /// A required request field is absent or blank (camelCase field name).
    MissingField(&'static str),
    /// A sign name is not one of the twelve zodiac signs.
    InvalidSign(String),
    /// A birth date is not an ISO-8601 date or RFC 3339 timestamp.
    InvalidBirthDate(String),
    /// Request body is not valid JSON for the endpoint.
    MalformedBody(String),
    /// Birth date parsed but failed validation.
    Zodiac(ZodiacError),
    /// Response could not be produced.
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error: 400 for bad input, 500 otherwise.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Internal(_) => 500,
            _ => 400,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidSign(name) => write!(f, "Invalid zodiac sign: {name}"),
            Self::InvalidBirthDate(text) => write!(f, "Invalid birth date: {text}"),
            Self::MalformedBody(msg) => write!(f, "Malformed request body: {msg}"),
            Self::Zodiac(e) => write!(f, "{e}"),
            Self::Internal(_) => write!(f, "Internal server error"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Zodiac(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ZodiacError> for ApiError {
    fn from(e: ZodiacError) -> Self {
        match e {
            ZodiacError::UnknownSign(name) => Self::InvalidSign(name),
            ZodiacError::InvalidDateFormat(text) => Self::InvalidBirthDate(text),
            other => Self::Zodiac(other),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedBody(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::MissingField("userSign").status_code(), 400);
        assert_eq!(ApiError::InvalidSign("Ophiuchus".into()).status_code(), 400);
        assert_eq!(ApiError::Zodiac(ZodiacError::FutureDate).status_code(), 400);
        assert_eq!(ApiError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn zodiac_errors_map_to_boundary_variants() {
        assert_eq!(
            ApiError::from(ZodiacError::UnknownSign("Foo".into())),
            ApiError::InvalidSign("Foo".into())
        );
        assert_eq!(
            ApiError::from(ZodiacError::InvalidDateFormat("x".into())),
            ApiError::InvalidBirthDate("x".into())
        );
        assert!(matches!(
            ApiError::from(ZodiacError::TooYoung { age: 10, min: 18 }),
            ApiError::Zodiac(_)
        ));
    }

    #[test]
    fn internal_message_is_generic() {
        assert_eq!(
            ApiError::Internal("stack trace".into()).to_string(),
            "Internal server error"
        );
        assert_eq!(ApiError::MissingField("birthDate").to_string(), "birthDate is required");
    }
}
