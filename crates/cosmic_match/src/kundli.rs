//! Sign-level Ashtakoot (Kundli) matching.
//!
//! Eight kootas scored from the two zodiac signs alone, summed to a guna
//! out of 36, plus a simplified Mangal Dosha check.
//!
//! Vashya, Yoni and Graha fall back to a random draw when their fixed rule
//! does not apply. The draws come from the caller's [`JitterSource`], in the
//! order Vashya, Yoni, Graha, at most one each.

use cosmic_zodiac::{Element, Planet, ZodiacSign};
use tracing::debug;

use crate::compatibility::BirthTimes;
use crate::jitter::JitterSource;
use crate::kundli_types::{AshtakootScores, GunaBand, KundliMatchingScore};

// ---------------------------------------------------------------------------
// Classifications
// ---------------------------------------------------------------------------

/// Vashya (control) group of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VashyaGroup {
    Chatuspad,
    Jalchar,
    Manav,
    Vanchar,
}

pub const fn vashya_group(sign: ZodiacSign) -> VashyaGroup {
    use ZodiacSign::*;
    match sign {
        Aries | Taurus | Leo | Sagittarius => VashyaGroup::Chatuspad,
        Cancer | Scorpio | Pisces => VashyaGroup::Jalchar,
        Gemini | Virgo | Libra | Aquarius => VashyaGroup::Manav,
        Capricorn => VashyaGroup::Vanchar,
    }
}

/// Gana (temperament) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

pub const fn gana(sign: ZodiacSign) -> Gana {
    use ZodiacSign::*;
    match sign {
        Gemini | Cancer | Sagittarius | Aquarius | Pisces => Gana::Deva,
        Taurus | Virgo => Gana::Manushya,
        Aries | Leo | Libra | Scorpio | Capricorn => Gana::Rakshasa,
    }
}

/// Nadi (pulse) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

pub const fn nadi(sign: ZodiacSign) -> Nadi {
    use ZodiacSign::*;
    match sign {
        Gemini | Cancer | Sagittarius | Aquarius => Nadi::Adi,
        Aries | Leo | Libra | Pisces => Nadi::Madhya,
        Taurus | Virgo | Scorpio | Capricorn => Nadi::Antya,
    }
}

/// Yoni name of a sign (one per sign, the Sanskrit rashi name).
pub const fn yoni(sign: ZodiacSign) -> &'static str {
    use ZodiacSign::*;
    match sign {
        Aries => "Mesha",
        Taurus => "Vrishabha",
        Gemini => "Mithuna",
        Cancer => "Karka",
        Leo => "Simha",
        Virgo => "Kanya",
        Libra => "Tula",
        Scorpio => "Vrishchika",
        Sagittarius => "Dhanu",
        Capricorn => "Makara",
        Aquarius => "Kumbha",
        Pisces => "Meena",
    }
}

/// Varna rank from the sign's element: Fire 4, Air 3, Water 2, Earth 1.
pub const fn varna_rank(element: Element) -> u8 {
    match element {
        Element::Fire => 4,
        Element::Air => 3,
        Element::Water => 2,
        Element::Earth => 1,
    }
}

/// Friendly planets for graha maitri. Outer planets have none.
pub fn friendly_planets(planet: Planet) -> &'static [Planet] {
    use Planet::*;
    match planet {
        Sun => &[Mars, Jupiter],
        Moon => &[Mercury, Venus],
        Mars => &[Sun, Jupiter],
        Mercury => &[Moon, Venus],
        Jupiter => &[Sun, Mars],
        Venus => &[Moon, Mercury],
        Saturn => &[Mercury, Venus],
        Uranus | Neptune | Pluto => &[],
    }
}

const MANGAL_SIGNS: [ZodiacSign; 6] = [
    ZodiacSign::Aries,
    ZodiacSign::Scorpio,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
];

pub fn has_mangal_placement(sign: ZodiacSign) -> bool {
    MANGAL_SIGNS.contains(&sign)
}

// ---------------------------------------------------------------------------
// Kootas
// ---------------------------------------------------------------------------

/// 1 when the first sign's varna rank is at least the second's. Asymmetric.
pub const fn varna_points(sign1: ZodiacSign, sign2: ZodiacSign) -> f64 {
    if varna_rank(element_of(sign1)) >= varna_rank(element_of(sign2)) {
        1.0
    } else {
        0.0
    }
}

/// 2 for the same vashya group, otherwise a coin flip of 0 or 1.
pub fn vashya_points<J: JitterSource + ?Sized>(
    sign1: ZodiacSign,
    sign2: ZodiacSign,
    jitter: &mut J,
) -> f64 {
    if vashya_group(sign1) == vashya_group(sign2) {
        2.0
    } else {
        f64::from(jitter.below(2))
    }
}

/// From the absolute index difference: even non-zero 3, odd 1.5, zero 0.
pub const fn tara_points(sign1: ZodiacSign, sign2: ZodiacSign) -> f64 {
    match sign1.index_distance(sign2) {
        0 => 0.0,
        d if d % 2 == 0 => 3.0,
        _ => 1.5,
    }
}

/// 4 for the same yoni, otherwise uniform in 1..=3.
pub fn yoni_points<J: JitterSource + ?Sized>(
    sign1: ZodiacSign,
    sign2: ZodiacSign,
    jitter: &mut J,
) -> f64 {
    if yoni(sign1) == yoni(sign2) {
        4.0
    } else {
        f64::from(jitter.below(3) + 1)
    }
}

/// 5 for the same ruler, 4 when the first ruler counts the second as a
/// friend, otherwise uniform in 1..=3.
pub fn graha_points<J: JitterSource + ?Sized>(
    planet1: Planet,
    planet2: Planet,
    jitter: &mut J,
) -> f64 {
    if planet1 == planet2 {
        5.0
    } else if friendly_planets(planet1).contains(&planet2) {
        4.0
    } else {
        f64::from(jitter.below(3) + 1)
    }
}

/// 6 for the same gana, 5 for Deva with Manushya, otherwise 1.
pub fn gana_points(sign1: ZodiacSign, sign2: ZodiacSign) -> f64 {
    match (gana(sign1), gana(sign2)) {
        (a, b) if a == b => 6.0,
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva) => 5.0,
        _ => 1.0,
    }
}

/// 7 for opposite signs, 4 for differences 2, 4, 8 or 10, otherwise 2.
pub const fn rashi_points(sign1: ZodiacSign, sign2: ZodiacSign) -> f64 {
    match sign1.index_distance(sign2) {
        6 => 7.0,
        2 | 4 | 8 | 10 => 4.0,
        _ => 2.0,
    }
}

/// 8 for different nadis, 0 for the same.
pub fn nadi_points(sign1: ZodiacSign, sign2: ZodiacSign) -> f64 {
    if nadi(sign1) != nadi(sign2) { 8.0 } else { 0.0 }
}

/// Dosha applies when exactly one sign is a Mangal placement; two cancel.
pub fn mangal_dosha(sign1: ZodiacSign, sign2: ZodiacSign) -> bool {
    has_mangal_placement(sign1) != has_mangal_placement(sign2)
}

// element() reads a static table and is not const
const fn element_of(sign: ZodiacSign) -> Element {
    use ZodiacSign::*;
    match sign {
        Aries | Leo | Sagittarius => Element::Fire,
        Taurus | Virgo | Capricorn => Element::Earth,
        Gemini | Libra | Aquarius => Element::Air,
        Cancer | Scorpio | Pisces => Element::Water,
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Recommendation lines for a guna total, plus two more when dosha is present.
pub fn kundli_recommendations(guna: f64, mangal_dosha: bool) -> Vec<String> {
    let lines: [&str; 2] = match GunaBand::from_guna(guna) {
        GunaBand::Excellent => [
            "Excellent match for marriage",
            "Very high compatibility in all aspects",
        ],
        GunaBand::VeryGood => [
            "Very good match with minor adjustments needed",
            "Strong potential for successful marriage",
        ],
        GunaBand::Good => [
            "Good match but requires understanding and compromise",
            "Focus on communication and shared goals",
        ],
        GunaBand::Average => [
            "Average compatibility - proceed with caution",
            "Consider pre-marital counseling",
        ],
        GunaBand::Poor => [
            "Poor compatibility - marriage not recommended",
            "Significant challenges expected",
        ],
    };
    let mut out: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    if mangal_dosha {
        out.push("Mangal Dosha present - consult with astrologer for remedies".to_string());
        out.push("Consider performing recommended rituals before marriage".to_string());
    }
    out
}

/// Ashtakoot matching between two signs.
///
/// Birth times are accepted for callers that collect them; sign-level
/// matching does not read them.
pub fn calculate_kundli_matching<J: JitterSource + ?Sized>(
    sign1: ZodiacSign,
    sign2: ZodiacSign,
    birth_times: BirthTimes<'_>,
    jitter: &mut J,
) -> KundliMatchingScore {
    let scores = AshtakootScores {
        varna: varna_points(sign1, sign2),
        vashya: vashya_points(sign1, sign2, jitter),
        tara: tara_points(sign1, sign2),
        yoni: yoni_points(sign1, sign2, jitter),
        graha: graha_points(sign1.ruling_planet(), sign2.ruling_planet(), jitter),
        gana: gana_points(sign1, sign2),
        rashi: rashi_points(sign1, sign2),
        nadi: nadi_points(sign1, sign2),
    };
    let guna = scores.total();
    let band = GunaBand::from_guna(guna);
    let dosha = mangal_dosha(sign1, sign2);

    debug!(
        %sign1,
        %sign2,
        guna,
        band = band.name(),
        mangal_dosha = dosha,
        has_birth_times = birth_times.any(),
        "kundli matching"
    );

    KundliMatchingScore {
        guna,
        compatibility: band,
        mangal_dosha: dosha,
        recommendations: kundli_recommendations(guna, dosha),
        detailed_scores: scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::{FixedJitter, ScriptedJitter};
    use cosmic_zodiac::ALL_SIGNS;
    use ZodiacSign::*;

    #[test]
    fn element_of_matches_reference_table() {
        for s in ALL_SIGNS {
            assert_eq!(element_of(s), s.element(), "{s}");
        }
    }

    #[test]
    fn varna_is_asymmetric() {
        // Fire over Earth
        assert_eq!(varna_points(Aries, Taurus), 1.0);
        assert_eq!(varna_points(Taurus, Aries), 0.0);
        assert_eq!(varna_points(Virgo, Capricorn), 1.0);
    }

    #[test]
    fn vashya_same_group_or_coin() {
        assert_eq!(vashya_points(Aries, Leo, &mut FixedJitter(0)), 2.0);
        assert_eq!(vashya_points(Aries, Cancer, &mut FixedJitter(0)), 0.0);
        assert_eq!(vashya_points(Aries, Cancer, &mut FixedJitter(1)), 1.0);
        assert_eq!(vashya_group(Capricorn), VashyaGroup::Vanchar);
    }

    #[test]
    fn tara_by_parity() {
        assert_eq!(tara_points(Aries, Aries), 0.0);
        assert_eq!(tara_points(Aries, Gemini), 3.0);
        assert_eq!(tara_points(Pisces, Aries), 1.5);
        assert_eq!(tara_points(Aries, Aquarius), 3.0);
    }

    #[test]
    fn yoni_and_graha() {
        assert_eq!(yoni_points(Leo, Leo, &mut FixedJitter(0)), 4.0);
        assert_eq!(yoni_points(Leo, Virgo, &mut FixedJitter(0)), 1.0);
        assert_eq!(yoni_points(Leo, Virgo, &mut FixedJitter(9)), 3.0);
        assert_eq!(graha_points(Planet::Venus, Planet::Venus, &mut FixedJitter(0)), 5.0);
        assert_eq!(graha_points(Planet::Sun, Planet::Mars, &mut FixedJitter(0)), 4.0);
        // friendship is read from the first planet's list only
        assert_eq!(graha_points(Planet::Saturn, Planet::Venus, &mut FixedJitter(0)), 4.0);
        assert_eq!(graha_points(Planet::Venus, Planet::Saturn, &mut FixedJitter(0)), 1.0);
        assert_eq!(graha_points(Planet::Pluto, Planet::Mars, &mut FixedJitter(2)), 3.0);
    }

    #[test]
    fn gana_rules() {
        assert_eq!(gana_points(Aries, Leo), 6.0);
        assert_eq!(gana_points(Gemini, Taurus), 5.0);
        assert_eq!(gana_points(Virgo, Pisces), 5.0);
        assert_eq!(gana_points(Aries, Gemini), 1.0);
        assert_eq!(gana_points(Taurus, Scorpio), 1.0);
    }

    #[test]
    fn rashi_and_nadi() {
        assert_eq!(rashi_points(Aries, Libra), 7.0);
        assert_eq!(rashi_points(Aries, Leo), 4.0);
        assert_eq!(rashi_points(Aries, Cancer), 2.0);
        assert_eq!(rashi_points(Aries, Aries), 2.0);
        assert_eq!(nadi_points(Aries, Leo), 0.0);
        assert_eq!(nadi_points(Aries, Taurus), 8.0);
    }

    #[test]
    fn mangal_cancels_in_pairs() {
        assert!(!mangal_dosha(Aries, Cancer));
        assert!(mangal_dosha(Aries, Taurus));
        assert!(mangal_dosha(Gemini, Capricorn));
        assert!(!mangal_dosha(Gemini, Virgo));
    }

    #[test]
    fn aries_cancer_with_minimum_draws() {
        let k = calculate_kundli_matching(Aries, Cancer, BirthTimes::default(), &mut FixedJitter(0));
        let d = k.detailed_scores;
        assert_eq!(
            (d.varna, d.vashya, d.tara, d.yoni, d.graha, d.gana, d.rashi, d.nadi),
            (1.0, 0.0, 1.5, 1.0, 1.0, 1.0, 2.0, 8.0)
        );
        assert_eq!(k.guna, 15.5);
        assert_eq!(k.compatibility, GunaBand::Average);
        assert!(!k.mangal_dosha);
        assert_eq!(
            k.recommendations,
            vec![
                "Average compatibility - proceed with caution".to_string(),
                "Consider pre-marital counseling".to_string(),
            ]
        );
    }

    #[test]
    fn draws_only_where_rules_fall_through() {
        // Leo/Leo: same group, same yoni, same ruler
        let mut script = ScriptedJitter::new(vec![0]);
        calculate_kundli_matching(Leo, Leo, BirthTimes::default(), &mut script);
        assert_eq!(script.consumed(), 0);

        // Aries/Cancer: all three fall through
        let mut script = ScriptedJitter::new(vec![0]);
        calculate_kundli_matching(Aries, Cancer, BirthTimes::default(), &mut script);
        assert_eq!(script.consumed(), 3);
    }

    #[test]
    fn dosha_appends_two_lines() {
        let recs = kundli_recommendations(30.0, true);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0], "Excellent match for marriage");
        assert_eq!(recs[3], "Consider performing recommended rituals before marriage");
    }
}
