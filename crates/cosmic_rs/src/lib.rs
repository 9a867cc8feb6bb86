//! Request boundary and service facade for Cosmic Connections scoring.
//!
//! Validates raw request fields into typed signs and dates, runs the
//! scoring engines with a per-request random source, and renders results
//! as `{ success, data | error }` JSON envelopes with an HTTP status.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cosmic_rs::*;
//!
//! let service = MatchService::new(ServiceConfig { seed: Some(42), ..ServiceConfig::default() });
//! let (status, body) = service.handle_request(
//!     Endpoint::Compatibility,
//!     r#"{"userSign":"Leo","partnerSign":"Aries"}"#,
//! );
//! assert_eq!(status, 200);
//! println!("{body}");
//! ```

pub mod boundary;
pub mod error;
pub mod service;
pub mod types;

// Primary re-exports: users should only need `use cosmic_rs::*`
pub use boundary::{ALL_ENDPOINTS, Endpoint, handle_request};
pub use error::ApiError;
pub use service::{MatchService, ServiceConfig};
pub use types::{
    CompatibilityRequest, Envelope, PairRequest, ProfileMatchRequest, ProfileMatchResponse,
    SignRequest, SignResponse,
};

// Re-export engine types so callers don't need to depend on the engine crates directly.
pub use cosmic_config::{ConfigError, CosmicConfig, init_tracing};
pub use cosmic_match::{
    ALL_KOOTAS, AshtakootScores, BirthTimes, CompatibilityScore, DetailedAnalysis,
    DetailedCompatibilityScore, FixedJitter, GunaBand, JitterSource, Koota, KundliMatchingScore,
    MAX_GUNA, ScoreBand, ScriptedJitter, UnknownSignPolicy, calculate_detailed_compatibility,
    calculate_kundli_matching, calculate_quick_compatibility, quick_label, rank_partners,
};
pub use cosmic_zodiac::{
    ALL_SIGNS, BirthDateRules, Element, Planet, Quality, ZodiacError, ZodiacInfo, ZodiacSign,
    format_birth_date, parse_birth_date, sign_for_date, sign_for_date_str, zodiac_info,
};
