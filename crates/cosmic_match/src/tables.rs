//! Static compatibility tables.
//!
//! Four lookup tables drive every score:
//! - Sign-pair base scores (12 x 12)
//! - Element-pair scores (4 x 4)
//! - Quality-pair scores (3 x 3)
//! - Ruling-planet-pair scores (10 x 10)
//!
//! All tables are indexed by the `index()` of the keying enum, so a lookup
//! between known enums can never miss. Name-keyed lookups for unvalidated
//! input go through [`base_score_lookup`], which reports an unknown pair
//! explicitly instead of substituting a value.

use std::str::FromStr;

use cosmic_zodiac::{ALL_SIGNS, Element, Planet, Quality, ZodiacSign};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sign-pair base scores
// ---------------------------------------------------------------------------

/// Base score for (row sign, column sign), both in zodiac order.
///
/// Stored directed; the current data happens to be symmetric.
pub const BASE_COMPATIBILITY: [[u8; 12]; 12] = [
    // Ari Tau Gem Can Leo Vir Lib Sco Sag Cap Aqu Pis
    [85, 60, 75, 50, 90, 45, 70, 80, 95, 40, 75, 55], // Aries
    [60, 80, 50, 85, 70, 90, 75, 65, 40, 95, 45, 80], // Taurus
    [75, 50, 85, 60, 80, 70, 90, 55, 75, 50, 95, 70], // Gemini
    [50, 85, 60, 80, 65, 75, 70, 90, 45, 70, 55, 95], // Cancer
    [90, 70, 80, 65, 85, 60, 80, 75, 90, 55, 70, 60], // Leo
    [45, 90, 70, 75, 60, 80, 65, 70, 50, 95, 60, 75], // Virgo
    [70, 75, 90, 70, 80, 65, 85, 60, 75, 70, 80, 85], // Libra
    [80, 65, 55, 90, 75, 70, 60, 85, 70, 80, 50, 90], // Scorpio
    [95, 40, 75, 45, 90, 50, 75, 70, 85, 60, 80, 65], // Sagittarius
    [40, 95, 50, 70, 55, 95, 70, 80, 60, 80, 65, 70], // Capricorn
    [75, 45, 95, 55, 70, 60, 80, 50, 80, 65, 85, 75], // Aquarius
    [55, 80, 70, 95, 60, 75, 85, 90, 65, 70, 75, 80], // Pisces
];

/// Score used for an unknown pair under [`UnknownSignPolicy::Neutral`].
pub const NEUTRAL_BASE_SCORE: f64 = 50.0;

/// Directed base score for a sign pair.
pub const fn base_score(sign1: ZodiacSign, sign2: ZodiacSign) -> u8 {
    BASE_COMPATIBILITY[sign1.index() as usize][sign2.index() as usize]
}

/// Result of a base-score lookup by sign name.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseLookup {
    /// Both names resolved; the tabulated score.
    Tabulated {
        sign1: ZodiacSign,
        sign2: ZodiacSign,
        score: u8,
    },
    /// At least one name is not a zodiac sign.
    UnknownPair { sign1: String, sign2: String },
}

impl BaseLookup {
    /// Score to use for this lookup under `policy`.
    ///
    /// `None` means the pair must be rejected.
    pub fn score(&self, policy: UnknownSignPolicy) -> Option<f64> {
        match (self, policy) {
            (Self::Tabulated { score, .. }, _) => Some(f64::from(*score)),
            (Self::UnknownPair { .. }, UnknownSignPolicy::Neutral) => Some(NEUTRAL_BASE_SCORE),
            (Self::UnknownPair { .. }, UnknownSignPolicy::Reject) => None,
        }
    }
}

/// Base-score lookup for two sign names (case-insensitive).
pub fn base_score_lookup(sign1: &str, sign2: &str) -> BaseLookup {
    match (ZodiacSign::from_str(sign1), ZodiacSign::from_str(sign2)) {
        (Ok(a), Ok(b)) => BaseLookup::Tabulated {
            sign1: a,
            sign2: b,
            score: base_score(a, b),
        },
        _ => BaseLookup::UnknownPair {
            sign1: sign1.to_string(),
            sign2: sign2.to_string(),
        },
    }
}

/// What to do with a sign pair that is missing from the base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSignPolicy {
    /// Refuse to score the pair.
    #[default]
    Reject,
    /// Score the pair at [`NEUTRAL_BASE_SCORE`] and log a warning.
    Neutral,
}

impl UnknownSignPolicy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Neutral => "neutral",
        }
    }
}

impl FromStr for UnknownSignPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("expected \"reject\" or \"neutral\", got {other:?}")),
        }
    }
}

/// Every other sign ranked by base score from `sign`, best first.
///
/// Ties keep zodiac order.
pub fn rank_partners(sign: ZodiacSign) -> Vec<(ZodiacSign, u8)> {
    let mut ranked: Vec<(ZodiacSign, u8)> = ALL_SIGNS
        .iter()
        .filter(|&&other| other != sign)
        .map(|&other| (other, base_score(sign, other)))
        .collect();
    // stable sort keeps zodiac order among equal scores
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

// ---------------------------------------------------------------------------
// Element and quality
// ---------------------------------------------------------------------------

/// Element-pair scores in Fire, Earth, Air, Water order.
pub const ELEMENT_COMPATIBILITY: [[u8; 4]; 4] = [
    [85, 60, 90, 45], // Fire
    [60, 85, 50, 90], // Earth
    [90, 50, 85, 65], // Air
    [45, 90, 65, 85], // Water
];

/// Quality-pair scores in Cardinal, Fixed, Mutable order.
pub const QUALITY_COMPATIBILITY: [[u8; 3]; 3] = [
    [70, 85, 80], // Cardinal
    [85, 75, 70], // Fixed
    [80, 70, 85], // Mutable
];

pub const fn element_score(e1: Element, e2: Element) -> u8 {
    ELEMENT_COMPATIBILITY[e1.index() as usize][e2.index() as usize]
}

pub const fn quality_score(q1: Quality, q2: Quality) -> u8 {
    QUALITY_COMPATIBILITY[q1.index() as usize][q2.index() as usize]
}

// ---------------------------------------------------------------------------
// Ruling planets
// ---------------------------------------------------------------------------

/// Planet-pair scores in Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn,
/// Uranus, Neptune, Pluto order.
pub const PLANETARY_COMPATIBILITY: [[u8; 10]; 10] = [
    // Sun Mon Mer Ven Mar Jup Sat Ura Nep Plu
    [85, 60, 80, 75, 85, 90, 50, 75, 70, 80], // Sun
    [60, 80, 70, 90, 50, 85, 55, 65, 95, 70], // Moon
    [80, 70, 85, 80, 60, 75, 70, 90, 75, 60], // Mercury
    [75, 90, 80, 85, 70, 85, 60, 70, 85, 65], // Venus
    [85, 50, 60, 70, 80, 75, 65, 70, 60, 90], // Mars
    [90, 85, 75, 85, 75, 85, 70, 80, 85, 75], // Jupiter
    [50, 55, 70, 60, 65, 70, 80, 75, 65, 85], // Saturn
    [75, 65, 90, 70, 70, 80, 75, 85, 80, 70], // Uranus
    [70, 95, 75, 85, 60, 85, 65, 80, 85, 80], // Neptune
    [80, 70, 60, 65, 90, 75, 85, 70, 80, 85], // Pluto
];

pub const fn planetary_score(p1: Planet, p2: Planet) -> u8 {
    PLANETARY_COMPATIBILITY[p1.index() as usize][p2.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_zodiac::{ALL_ELEMENTS, ALL_PLANETS, ALL_QUALITIES};

    #[test]
    fn base_fixtures() {
        assert_eq!(base_score(ZodiacSign::Leo, ZodiacSign::Aries), 90);
        assert_eq!(base_score(ZodiacSign::Aries, ZodiacSign::Taurus), 60);
        assert_eq!(base_score(ZodiacSign::Taurus, ZodiacSign::Aries), 60);
        assert_eq!(base_score(ZodiacSign::Aries, ZodiacSign::Sagittarius), 95);
    }

    #[test]
    fn base_table_is_complete_and_in_range() {
        for a in ALL_SIGNS {
            for b in ALL_SIGNS {
                let s = base_score(a, b);
                assert!((40..=95).contains(&s), "{a}-{b}: {s}");
            }
        }
    }

    #[test]
    fn current_data_is_symmetric() {
        for a in ALL_SIGNS {
            for b in ALL_SIGNS {
                assert_eq!(base_score(a, b), base_score(b, a), "{a}-{b}");
            }
        }
        for p in ALL_PLANETS {
            for q in ALL_PLANETS {
                assert_eq!(planetary_score(p, q), planetary_score(q, p), "{p}-{q}");
            }
        }
    }

    #[test]
    fn element_and_quality_tables() {
        assert_eq!(element_score(Element::Fire, Element::Air), 90);
        assert_eq!(element_score(Element::Water, Element::Fire), 45);
        assert_eq!(quality_score(Quality::Fixed, Quality::Cardinal), 85);
        for e in ALL_ELEMENTS {
            assert_eq!(element_score(e, e), 85);
        }
        for q in ALL_QUALITIES {
            assert!(quality_score(q, q) >= 70);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            base_score_lookup("leo", "ARIES"),
            BaseLookup::Tabulated {
                sign1: ZodiacSign::Leo,
                sign2: ZodiacSign::Aries,
                score: 90,
            }
        );
        let unknown = base_score_lookup("Ophiuchus", "Leo");
        assert!(matches!(unknown, BaseLookup::UnknownPair { .. }));
        assert_eq!(unknown.score(UnknownSignPolicy::Reject), None);
        assert_eq!(unknown.score(UnknownSignPolicy::Neutral), Some(50.0));
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("Neutral".parse(), Ok(UnknownSignPolicy::Neutral));
        assert_eq!(" reject ".parse(), Ok(UnknownSignPolicy::Reject));
        assert!("fallback".parse::<UnknownSignPolicy>().is_err());
        assert_eq!(UnknownSignPolicy::default(), UnknownSignPolicy::Reject);
    }

    #[test]
    fn ranking_is_descending_and_excludes_self() {
        let ranked = rank_partners(ZodiacSign::Aries);
        assert_eq!(ranked.len(), 11);
        assert_eq!(ranked[0], (ZodiacSign::Sagittarius, 95));
        assert_eq!(ranked[1], (ZodiacSign::Leo, 90));
        assert!(ranked.iter().all(|(s, _)| *s != ZodiacSign::Aries));
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        // Gemini and Aquarius tie at 75; zodiac order holds
        let gem = ranked.iter().position(|(s, _)| *s == ZodiacSign::Gemini);
        let aqu = ranked.iter().position(|(s, _)| *s == ZodiacSign::Aquarius);
        assert!(gem < aqu);
    }
}
