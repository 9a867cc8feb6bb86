//! Request and response bodies for the JSON boundary.
//!
//! Request fields are optional at the type level so that a missing field
//! is reported as [`ApiError::MissingField`] rather than a parse failure.
//!
//! [`ApiError::MissingField`]: crate::error::ApiError::MissingField

use cosmic_match::DetailedCompatibilityScore;
use cosmic_zodiac::{ZodiacInfo, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    pub user_sign: Option<String>,
    pub partner_sign: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub birth_date: Option<String>,
}

/// Shared by the detailed and Kundli endpoints. Birth times are optional
/// for the former and required for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRequest {
    pub user_sign: Option<String>,
    pub partner_sign: Option<String>,
    pub user_birth_time: Option<String>,
    pub partner_birth_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMatchRequest {
    pub user_birth_date: Option<String>,
    pub partner_birth_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignResponse {
    pub sign: ZodiacSign,
    pub info: &'static ZodiacInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMatchResponse {
    pub user_sign: ZodiacSign,
    pub partner_sign: ZodiacSign,
    pub user_age: u32,
    pub partner_age: u32,
    pub compatibility: DetailedCompatibilityScore,
}

/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_camel_case() {
        let r: PairRequest = serde_json::from_str(
            r#"{"userSign":"Leo","partnerSign":"Aries","userBirthTime":"10:30"}"#,
        )
        .unwrap();
        assert_eq!(r.user_sign.as_deref(), Some("Leo"));
        assert_eq!(r.user_birth_time.as_deref(), Some("10:30"));
        assert_eq!(r.partner_birth_time, None);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let r: CompatibilityRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(r, CompatibilityRequest::default());
    }

    #[test]
    fn envelope_shapes() {
        let ok = serde_json::to_value(Envelope::ok(5)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 5}));
        let err = serde_json::to_value(Envelope::<()>::err("bad")).unwrap();
        assert_eq!(err, serde_json::json!({"success": false, "error": "bad"}));
    }
}
