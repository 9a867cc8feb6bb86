//! Quick compatibility from the base score alone.
//!
//! Every aspect is the base score plus an offset; element, quality and
//! planet tables are not consulted. Draw order and spans match the detailed
//! engine.

use cosmic_zodiac::ZodiacSign;
use tracing::debug;

use crate::jitter::{
    COMMUNICATION_JITTER, EMOTIONAL_JITTER, JitterSource, MARS_JITTER, MOON_JITTER,
    PHYSICAL_JITTER, RISING_JITTER, SPIRITUAL_JITTER, SUN_JITTER, VENUS_JITTER, clamp_percent,
};
use crate::narrative;
use crate::score_types::{CompatibilityScore, weighted_overall};
use crate::tables::base_score;

/// Quick compatibility between two known signs.
pub fn calculate_quick_compatibility<J: JitterSource + ?Sized>(
    sign1: ZodiacSign,
    sign2: ZodiacSign,
    jitter: &mut J,
) -> CompatibilityScore {
    let challenges = narrative::sign_pair_challenges(sign1, sign2)
        .iter()
        .map(|s| s.to_string())
        .collect();
    quick_from_base(
        f64::from(base_score(sign1, sign2)),
        sign1.name(),
        sign2.name(),
        challenges,
        jitter,
    )
}

/// Quick compatibility from an explicit base score.
///
/// Used for pairs scored under the neutral unknown-sign policy, where no
/// tabulated base or sign-pair challenges exist.
pub fn quick_from_base<J: JitterSource + ?Sized>(
    base: f64,
    user_label: &str,
    partner_label: &str,
    challenges: Vec<String>,
    jitter: &mut J,
) -> CompatibilityScore {
    let sun = clamp_percent(base + SUN_JITTER.draw(jitter));
    let moon = clamp_percent(base + MOON_JITTER.draw(jitter));
    let rising = clamp_percent(base + RISING_JITTER.draw(jitter));
    let venus = clamp_percent(base + VENUS_JITTER.draw(jitter));
    let mars = clamp_percent(base + MARS_JITTER.draw(jitter));
    let communication = clamp_percent(base + COMMUNICATION_JITTER.draw(jitter));
    let emotional = clamp_percent(base + EMOTIONAL_JITTER.draw(jitter));
    let physical = clamp_percent(base + PHYSICAL_JITTER.draw(jitter));
    let spiritual = clamp_percent(base + SPIRITUAL_JITTER.draw(jitter));

    let overall = weighted_overall(sun, moon, rising, communication, emotional, physical);
    debug!(user = user_label, partner = partner_label, base, overall, "quick compatibility");

    CompatibilityScore {
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
        challenges,
        strengths: narrative::quick_strengths(overall),
        advice: narrative::quick_advice(user_label, partner_label, overall),
    }
}

/// Challenges used when the sign pair could not be resolved.
pub fn fallback_challenges() -> Vec<String> {
    vec![
        "Different communication styles".to_string(),
        "Different life approaches".to_string(),
    ]
}
