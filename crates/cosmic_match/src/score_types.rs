//! Result types for the compatibility engines.

use serde::Serialize;

/// Banding of an overall 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 85 and above.
    Excellent,
    /// 70 to 84.
    Good,
    /// 55 to 69.
    Learning,
    /// Below 55.
    Challenging,
}

impl ScoreBand {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 85.0 {
            Self::Excellent
        } else if overall >= 70.0 {
            Self::Good
        } else if overall >= 55.0 {
            Self::Learning
        } else {
            Self::Challenging
        }
    }

    /// Display label for a result card.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Great Match",
            Self::Learning => "Good Match",
            Self::Challenging => "Challenging",
        }
    }
}

/// Sign-pair compatibility with per-aspect scores.
///
/// Every numeric field is in `[0, 100]`. `overall` is a whole number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub overall: f64,
    pub sun_sign: f64,
    pub moon_sign: f64,
    pub rising_sign: f64,
    pub venus_sign: f64,
    pub mars_sign: f64,
    pub communication: f64,
    pub emotional: f64,
    pub physical: f64,
    pub spiritual: f64,
    pub challenges: Vec<String>,
    pub strengths: Vec<String>,
    pub advice: Vec<String>,
}

impl CompatibilityScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_overall(self.overall)
    }
}

/// Four relationship-context narratives, one sentence pair each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedAnalysis {
    pub love: String,
    pub friendship: String,
    pub marriage: String,
    pub business: String,
}

/// [`CompatibilityScore`] extended with narratives and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCompatibilityScore {
    #[serde(flatten)]
    pub score: CompatibilityScore,
    pub element_compatibility: f64,
    pub quality_compatibility: f64,
    pub planetary_compatibility: f64,
    pub detailed_analysis: DetailedAnalysis,
    pub recommendations: Vec<String>,
}

/// Weights of the aspects that feed the overall score. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverallWeights {
    pub sun: f64,
    pub moon: f64,
    pub rising: f64,
    pub communication: f64,
    pub emotional: f64,
    pub physical: f64,
}

pub const OVERALL_WEIGHTS: OverallWeights = OverallWeights {
    sun: 0.25,
    moon: 0.2,
    rising: 0.15,
    communication: 0.15,
    emotional: 0.15,
    physical: 0.1,
};

/// Weighted overall score, rounded and clamped to `[0, 100]`.
///
/// Venus, Mars and spiritual scores are reported but carry no weight.
pub fn weighted_overall(
    sun: f64,
    moon: f64,
    rising: f64,
    communication: f64,
    emotional: f64,
    physical: f64,
) -> f64 {
    let w = OVERALL_WEIGHTS;
    let weighted = sun * w.sun
        + moon * w.moon
        + rising * w.rising
        + communication * w.communication
        + emotional * w.emotional
        + physical * w.physical;
    (weighted / 100.0 * 100.0).round().clamp(0.0, 100.0)
}
