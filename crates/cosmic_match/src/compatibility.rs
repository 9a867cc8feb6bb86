//! Detailed sign-pair compatibility.
//!
//! Sun, moon, rising, Venus, Mars, emotional and physical scores are the
//! tabulated base score plus a bounded offset. Communication starts from the
//! mean of the element and quality scores and spiritual from the
//! ruling-planet score. Each gets its own offset.
//!
//! # Non-determinism
//!
//! Every call draws nine offsets from the supplied [`JitterSource`], in this
//! order: sun, moon, rising, Venus, Mars, communication, emotional, physical,
//! spiritual. Two calls with the same signs return different scores unless
//! the source replays the same draws (a seeded RNG, [`FixedJitter`] or
//! [`ScriptedJitter`]).
//!
//! [`FixedJitter`]: crate::jitter::FixedJitter
//! [`ScriptedJitter`]: crate::jitter::ScriptedJitter

use cosmic_zodiac::ZodiacSign;
use tracing::debug;

use crate::jitter::{
    COMMUNICATION_JITTER, EMOTIONAL_JITTER, JitterSource, MARS_JITTER, MOON_JITTER,
    PHYSICAL_JITTER, RISING_JITTER, SPIRITUAL_JITTER, SUN_JITTER, VENUS_JITTER, clamp_percent,
};
use crate::narrative;
use crate::score_types::{CompatibilityScore, DetailedCompatibilityScore, ScoreBand, weighted_overall};
use crate::tables::{base_score, element_score, planetary_score, quality_score};

/// Optional birth times for the two people, `HH:MM` local time.
///
/// Accepted so callers can pass them through; the sign-level model does not
/// read them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthTimes<'a> {
    pub user: Option<&'a str>,
    pub partner: Option<&'a str>,
}

impl BirthTimes<'_> {
    /// Whether either time was supplied.
    pub fn any(&self) -> bool {
        self.user.is_some() || self.partner.is_some()
    }
}

/// Full compatibility between two signs, with narratives.
///
/// See the module docs for the draw order.
pub fn calculate_detailed_compatibility<J: JitterSource + ?Sized>(
    sign1: ZodiacSign,
    sign2: ZodiacSign,
    birth_times: BirthTimes<'_>,
    jitter: &mut J,
) -> DetailedCompatibilityScore {
    let base = f64::from(base_score(sign1, sign2));
    let element = f64::from(element_score(sign1.element(), sign2.element()));
    let quality = f64::from(quality_score(sign1.quality(), sign2.quality()));
    let planetary = f64::from(planetary_score(sign1.ruling_planet(), sign2.ruling_planet()));

    let sun = clamp_percent(base + SUN_JITTER.draw(jitter));
    let moon = clamp_percent(base + MOON_JITTER.draw(jitter));
    let rising = clamp_percent(base + RISING_JITTER.draw(jitter));
    let venus = clamp_percent(base + VENUS_JITTER.draw(jitter));
    let mars = clamp_percent(base + MARS_JITTER.draw(jitter));

    let communication =
        clamp_percent((element + quality) / 2.0 + COMMUNICATION_JITTER.draw(jitter));
    let emotional = clamp_percent(base + EMOTIONAL_JITTER.draw(jitter));
    let physical = clamp_percent(base + PHYSICAL_JITTER.draw(jitter));
    let spiritual = clamp_percent(planetary + SPIRITUAL_JITTER.draw(jitter));

    let overall = weighted_overall(sun, moon, rising, communication, emotional, physical);
    let band = ScoreBand::from_overall(overall);

    debug!(
        %sign1,
        %sign2,
        base,
        overall,
        band = ?band,
        has_birth_times = birth_times.any(),
        "detailed compatibility"
    );

    DetailedCompatibilityScore {
        score: CompatibilityScore {
            overall,
            sun_sign: sun,
            moon_sign: moon,
            rising_sign: rising,
            venus_sign: venus,
            mars_sign: mars,
            communication,
            emotional,
            physical,
            spiritual,
            challenges: narrative::element_challenges(sign1.element(), sign2.element())
                .iter()
                .map(|s| s.to_string())
                .collect(),
            strengths: narrative::strengths(band),
            advice: narrative::advice(band),
        },
        element_compatibility: element,
        quality_compatibility: quality,
        planetary_compatibility: planetary,
        detailed_analysis: narrative::detailed_analysis(band),
        recommendations: narrative::recommendations(band),
    }
}
