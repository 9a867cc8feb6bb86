//! JSON request boundary.
//!
//! Maps an endpoint and a raw JSON body to an HTTP status and a JSON
//! envelope, the way an HTTP handler would. No transport is included.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;
use crate::service::MatchService;
use crate::types::Envelope;

/// Fallback body when the envelope itself cannot be serialized.
const INTERNAL_ERROR_BODY: &str = r#"{"success":false,"error":"Internal server error"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Quick compatibility from `userSign`/`partnerSign`.
    Compatibility,
    /// Sign lookup from `birthDate`.
    Sign,
    /// Detailed compatibility with optional birth times.
    Detailed,
    /// Kundli matching with required birth times.
    Kundli,
    /// Detailed compatibility from two birth dates.
    ProfileMatch,
}

pub const ALL_ENDPOINTS: [Endpoint; 5] = [
    Endpoint::Compatibility,
    Endpoint::Sign,
    Endpoint::Detailed,
    Endpoint::Kundli,
    Endpoint::ProfileMatch,
];

impl Endpoint {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compatibility => "compatibility",
            Self::Sign => "sign",
            Self::Detailed => "detailed",
            Self::Kundli => "kundli",
            Self::ProfileMatch => "profile-match",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_ascii_lowercase();
        ALL_ENDPOINTS
            .iter()
            .copied()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = ALL_ENDPOINTS.iter().map(|e| e.name()).collect();
                format!("unknown endpoint {s:?}, expected one of {}", names.join(", "))
            })
    }
}

impl MatchService {
    /// Handle one request, returning `(status, body)`.
    pub fn handle_request(&self, endpoint: Endpoint, body: &str) -> (u16, String) {
        let result = match endpoint {
            Endpoint::Compatibility => parse(body).and_then(|r| to_data(self.compatibility(&r)?)),
            Endpoint::Sign => parse(body).and_then(|r| to_data(self.sign(&r)?)),
            Endpoint::Detailed => parse(body).and_then(|r| to_data(self.detailed(&r)?)),
            Endpoint::Kundli => parse(body).and_then(|r| to_data(self.kundli(&r)?)),
            Endpoint::ProfileMatch => parse(body).and_then(|r| to_data(self.match_profiles(&r)?)),
        };

        match result {
            Ok(data) => (200, render(&Envelope::ok(data))),
            Err(e) => {
                warn!(%endpoint, status = e.status_code(), error = %e, "request rejected");
                (e.status_code(), render(&Envelope::<()>::err(e.to_string())))
            }
        }
    }
}

/// Handle one request with a service built from defaults.
pub fn handle_request(endpoint: Endpoint, body: &str) -> (u16, String) {
    MatchService::default().handle_request(endpoint, body)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn to_data<T: Serialize>(value: T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Internal(e.to_string()))
}

fn render<T: Serialize>(envelope: &Envelope<T>) -> String {
    serde_json::to_string(envelope).unwrap_or_else(|_| INTERNAL_ERROR_BODY.to_string())
}
