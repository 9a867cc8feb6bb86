//! Validating service facade over the scoring engines.

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use cosmic_config::CosmicConfig;
use cosmic_match::{
    BaseLookup, BirthTimes, CompatibilityScore, DetailedCompatibilityScore, KundliMatchingScore,
    UnknownSignPolicy, base_score_lookup, calculate_detailed_compatibility,
    calculate_kundli_matching, calculate_quick_compatibility, fallback_challenges,
    quick_from_base, rank_partners,
};
use cosmic_zodiac::{
    BirthDateRules, ZodiacSign, parse_birth_date, sign_for_date, validate_birth_date, zodiac_info,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{
    CompatibilityRequest, PairRequest, ProfileMatchRequest, ProfileMatchResponse, SignRequest,
    SignResponse,
};

/// Settings for a [`MatchService`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    /// Seed for score offsets. Each request starts a fresh generator from
    /// this seed, so identical requests give identical results.
    pub seed: Option<u64>,
    pub unknown_sign_policy: UnknownSignPolicy,
    pub birth_rules: BirthDateRules,
    /// Day ages are computed on. `None` uses the local date.
    pub reference_date: Option<NaiveDate>,
}

impl From<&CosmicConfig> for ServiceConfig {
    fn from(cfg: &CosmicConfig) -> Self {
        Self {
            seed: cfg.seed,
            unknown_sign_policy: cfg.unknown_sign_policy,
            birth_rules: cfg.birth_rules,
            reference_date: None,
        }
    }
}

/// Entry point for validated scoring requests.
///
/// Holds no mutable state and is safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct MatchService {
    config: ServiceConfig,
}

impl MatchService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run `f` with this request's random source.
    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                f(&mut rng)
            }
            None => f(&mut rand::thread_rng()),
        }
    }

    fn today(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Quick compatibility between two sign names.
    ///
    /// Unknown names are rejected or scored from the neutral base,
    /// depending on [`ServiceConfig::unknown_sign_policy`].
    pub fn compatibility(&self, req: &CompatibilityRequest) -> Result<CompatibilityScore, ApiError> {
        let user = required(&req.user_sign, "userSign")?;
        let partner = required(&req.partner_sign, "partnerSign")?;

        let lookup = base_score_lookup(user, partner);
        match &lookup {
            BaseLookup::Tabulated { sign1, sign2, score } => {
                debug!(%sign1, %sign2, base = score, "quick compatibility request");
                Ok(self.with_rng(|rng| calculate_quick_compatibility(*sign1, *sign2, rng)))
            }
            BaseLookup::UnknownPair { sign1, sign2 } => {
                match lookup.score(self.config.unknown_sign_policy) {
                    Some(base) => {
                        warn!(
                            sign1 = sign1.as_str(),
                            sign2 = sign2.as_str(),
                            base,
                            "unknown sign pair scored from neutral base"
                        );
                        Ok(self.with_rng(|rng| {
                            quick_from_base(base, sign1, sign2, fallback_challenges(), rng)
                        }))
                    }
                    None => {
                        let bad = if ZodiacSign::from_str(sign1).is_err() {
                            sign1
                        } else {
                            sign2
                        };
                        Err(ApiError::InvalidSign(bad.clone()))
                    }
                }
            }
        }
    }

    /// Sign and reference record for a birth date.
    pub fn sign(&self, req: &SignRequest) -> Result<SignResponse, ApiError> {
        let text = required(&req.birth_date, "birthDate")?;
        let sign = sign_for_date(parse_birth_date(text)?)?;
        debug!(birth_date = text, %sign, "resolved sign");
        Ok(SignResponse {
            sign,
            info: zodiac_info(sign),
        })
    }

    /// Detailed compatibility; birth times are optional.
    pub fn detailed(&self, req: &PairRequest) -> Result<DetailedCompatibilityScore, ApiError> {
        let (user, partner) = pair_signs(req)?;
        let times = BirthTimes {
            user: optional(&req.user_birth_time),
            partner: optional(&req.partner_birth_time),
        };
        Ok(self.with_rng(|rng| calculate_detailed_compatibility(user, partner, times, rng)))
    }

    /// Kundli matching; both birth times are required.
    pub fn kundli(&self, req: &PairRequest) -> Result<KundliMatchingScore, ApiError> {
        let (user, partner) = pair_signs(req)?;
        let times = BirthTimes {
            user: Some(required(&req.user_birth_time, "userBirthTime")?),
            partner: Some(required(&req.partner_birth_time, "partnerBirthTime")?),
        };
        Ok(self.with_rng(|rng| calculate_kundli_matching(user, partner, times, rng)))
    }

    /// Resolve both profiles' signs from their birth dates and score them.
    ///
    /// Both dates must pass [`ServiceConfig::birth_rules`].
    pub fn match_profiles(
        &self,
        req: &ProfileMatchRequest,
    ) -> Result<ProfileMatchResponse, ApiError> {
        let today = self.today();
        let rules = &self.config.birth_rules;

        let user_date = parse_birth_date(required(&req.user_birth_date, "userBirthDate")?)?;
        let partner_date =
            parse_birth_date(required(&req.partner_birth_date, "partnerBirthDate")?)?;
        let user_age = validate_birth_date(user_date, today, rules)?;
        let partner_age = validate_birth_date(partner_date, today, rules)?;

        let user_sign = sign_for_date(user_date)?;
        let partner_sign = sign_for_date(partner_date)?;
        debug!(%user_sign, %partner_sign, "profile match");

        let compatibility = self.with_rng(|rng| {
            calculate_detailed_compatibility(user_sign, partner_sign, BirthTimes::default(), rng)
        });
        Ok(ProfileMatchResponse {
            user_sign,
            partner_sign,
            user_age,
            partner_age,
            compatibility,
        })
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Age for a birth date, after validation.
    pub fn validate(&self, birth_date: &str) -> Result<u32, ApiError> {
        let date = parse_birth_date(birth_date)?;
        Ok(validate_birth_date(
            date,
            self.today(),
            &self.config.birth_rules,
        )?)
    }

    /// Partner signs ranked by base score.
    pub fn rank(&self, sign: &str) -> Result<Vec<(ZodiacSign, u8)>, ApiError> {
        Ok(rank_partners(parse_sign(sign)?))
    }
}

fn parse_sign(text: &str) -> Result<ZodiacSign, ApiError> {
    ZodiacSign::from_str(text).map_err(|_| ApiError::InvalidSign(text.trim().to_string()))
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, ApiError> {
    optional(field).ok_or(ApiError::MissingField(name))
}

fn optional(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn pair_signs(req: &PairRequest) -> Result<(ZodiacSign, ZodiacSign), ApiError> {
    let user = parse_sign(required(&req.user_sign, "userSign")?)?;
    let partner = parse_sign(required(&req.partner_sign, "partnerSign")?)?;
    Ok((user, partner))
}
