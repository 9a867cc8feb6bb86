//! Fixed narrative text attached to compatibility results.
//!
//! The detailed engine selects text by [`ScoreBand`]; the quick engine has
//! its own, finer banding (90/80/70/60) and sign-pair challenges.

use cosmic_zodiac::{Element, ZodiacSign};

use crate::score_types::{DetailedAnalysis, ScoreBand};

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Detailed engine
// ---------------------------------------------------------------------------

/// Challenges for an element pairing, order-insensitive.
pub fn element_challenges(e1: Element, e2: Element) -> &'static [&'static str] {
    use Element::*;
    match (e1, e2) {
        (Fire, Earth) | (Earth, Fire) => &[
            "Different paces of life",
            "Fire's impulsiveness vs Earth's caution",
        ],
        (Fire, Water) | (Water, Fire) => &[
            "Emotional expression differences",
            "Fire's directness vs Water's sensitivity",
        ],
        (Fire, Air) | (Air, Fire) => &[
            "Commitment levels",
            "Fire's intensity vs Air's detachment",
        ],
        (Earth, Water) | (Water, Earth) => &[
            "Practical vs emotional decision making",
            "Different communication styles",
        ],
        (Earth, Air) | (Air, Earth) => &["Routine vs spontaneity", "Different social needs"],
        (Air, Water) | (Water, Air) => &["Logic vs intuition", "Different emotional needs"],
        // same element
        _ => &[
            "Different perspectives on life",
            "Communication style differences",
        ],
    }
}

pub fn strengths(band: ScoreBand) -> Vec<String> {
    owned(match band {
        ScoreBand::Excellent => &[
            "Natural understanding and harmony",
            "Complementary strengths and weaknesses",
            "Strong emotional and intellectual connection",
            "Shared values and life goals",
        ],
        ScoreBand::Good => &[
            "Good communication and understanding",
            "Mutual respect and admiration",
            "Balanced relationship dynamics",
            "Potential for growth together",
        ],
        ScoreBand::Learning => &[
            "Learning opportunities from differences",
            "Potential for personal growth",
            "Interesting contrast in personalities",
        ],
        ScoreBand::Challenging => &[
            "Opportunity to learn patience",
            "Challenge that can lead to growth",
        ],
    })
}

pub fn advice(band: ScoreBand) -> Vec<String> {
    owned(match band {
        ScoreBand::Excellent => &[
            "This is a highly compatible match with great potential for a lasting relationship.",
            "Focus on nurturing your natural connection and supporting each other's dreams.",
        ],
        ScoreBand::Good => &[
            "You have good compatibility with room for growth.",
            "Work on open communication and understanding each other's perspectives.",
        ],
        ScoreBand::Learning => &[
            "This relationship will require effort but can be rewarding.",
            "Focus on finding common ground and appreciating your differences.",
        ],
        ScoreBand::Challenging => &[
            "This match will require significant work and compromise.",
            "Consider whether your core values and life goals align.",
        ],
    })
}

fn love(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "Your romantic connection is deeply harmonious with natural chemistry and mutual understanding. You inspire each other and create a loving, supportive partnership."
        }
        ScoreBand::Good => {
            "Your love compatibility is strong with good potential for romance. You appreciate each other's qualities and can build a meaningful relationship with effort."
        }
        ScoreBand::Learning => {
            "Your romantic compatibility requires work but can be fulfilling. Focus on understanding each other's love languages and emotional needs."
        }
        ScoreBand::Challenging => {
            "Romance between you may face challenges. Consider whether you're truly compatible for a long-term romantic relationship."
        }
    }
}

fn friendship(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "You make excellent friends with natural understanding and shared interests. Your friendship is likely to be long-lasting and mutually beneficial."
        }
        ScoreBand::Good => {
            "Your friendship has good potential with mutual respect and interesting dynamics. You can learn from each other and enjoy each other's company."
        }
        ScoreBand::Learning => {
            "As friends, you may have some challenges but can appreciate each other's different perspectives and grow from the relationship."
        }
        ScoreBand::Challenging => {
            "Friendship may require significant effort to maintain. You may be better as casual acquaintances than close friends."
        }
    }
}

fn marriage(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "Marriage compatibility is excellent with strong potential for a lasting, harmonious partnership. You share similar values and complement each other well."
        }
        ScoreBand::Good => {
            "Marriage potential is good with some areas to work on. Focus on communication and understanding each other's needs for a successful partnership."
        }
        ScoreBand::Learning => {
            "Marriage will require significant effort and compromise. Consider pre-marital counseling to understand and work through your differences."
        }
        ScoreBand::Challenging => {
            "Marriage compatibility is challenging. Carefully consider whether you share the fundamental values and goals needed for a lifelong partnership."
        }
    }
}

fn business(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => {
            "Business partnership potential is excellent. You complement each other's skills and have similar work ethics and goals."
        }
        ScoreBand::Good => {
            "You could work well together in business with clear role definitions and good communication about expectations and goals."
        }
        ScoreBand::Learning => {
            "Business partnership may work in specific circumstances but requires clear agreements and defined responsibilities."
        }
        ScoreBand::Challenging => {
            "Business partnership is not recommended due to different work styles and approaches to decision-making."
        }
    }
}

pub fn detailed_analysis(band: ScoreBand) -> DetailedAnalysis {
    DetailedAnalysis {
        love: love(band).to_string(),
        friendship: friendship(band).to_string(),
        marriage: marriage(band).to_string(),
        business: business(band).to_string(),
    }
}

pub fn recommendations(band: ScoreBand) -> Vec<String> {
    owned(match band {
        ScoreBand::Excellent => &[
            "Continue nurturing your natural connection",
            "Support each other's individual growth",
            "Plan for your future together",
        ],
        ScoreBand::Good => &[
            "Work on open and honest communication",
            "Learn about each other's zodiac traits",
            "Find activities you both enjoy",
        ],
        ScoreBand::Learning => &[
            "Practice patience and understanding",
            "Focus on your shared values",
            "Consider couples counseling if serious",
        ],
        ScoreBand::Challenging => &[
            "Honestly evaluate your compatibility",
            "Consider if this relationship serves both of you",
            "Seek guidance from trusted friends or counselors",
        ],
    })
}

// ---------------------------------------------------------------------------
// Quick engine
// ---------------------------------------------------------------------------

/// Challenges for a sign pairing, order-insensitive.
pub fn sign_pair_challenges(s1: ZodiacSign, s2: ZodiacSign) -> &'static [&'static str] {
    use ZodiacSign::*;
    match (s1, s2) {
        (Aries, Taurus) | (Taurus, Aries) => &[
            "Different approaches to change",
            "Aries impatience vs Taurus stability",
        ],
        (Gemini, Cancer) | (Cancer, Gemini) => &[
            "Communication styles",
            "Gemini logic vs Cancer emotions",
        ],
        (Leo, Virgo) | (Virgo, Leo) => &[
            "Attention to detail",
            "Leo drama vs Virgo practicality",
        ],
        (Libra, Scorpio) | (Scorpio, Libra) => &[
            "Decision making",
            "Libra indecision vs Scorpio intensity",
        ],
        (Sagittarius, Capricorn) | (Capricorn, Sagittarius) => &[
            "Life goals",
            "Sagittarius freedom vs Capricorn structure",
        ],
        (Aquarius, Pisces) | (Pisces, Aquarius) => &[
            "Reality vs dreams",
            "Aquarius logic vs Pisces intuition",
        ],
        _ => &[
            "Different communication styles",
            "Different life approaches",
        ],
    }
}

pub fn quick_strengths(overall: f64) -> Vec<String> {
    owned(if overall >= 90.0 {
        &[
            "You have incredible cosmic chemistry",
            "Your energies complement each other perfectly",
            "This is a rare and special connection",
        ]
    } else if overall >= 80.0 {
        &[
            "You have strong astrological compatibility",
            "Your relationship has great potential",
            "Focus on communication to strengthen your bond",
        ]
    } else if overall >= 70.0 {
        &[
            "You have good compatibility with some challenges",
            "Work on understanding each other's differences",
            "Patience and compromise will be key",
        ]
    } else if overall >= 60.0 {
        &[
            "You have moderate compatibility",
            "Focus on your shared values and interests",
            "Be patient as you learn to work together",
        ]
    } else {
        &[
            "This relationship will require extra effort",
            "Focus on communication and understanding",
            "Consider if your core values align",
        ]
    })
}

/// Two advice lines: the headline percentage, then a banded outlook.
pub fn quick_advice(user: &str, partner: &str, overall: f64) -> Vec<String> {
    let outlook = if overall >= 80.0 {
        "This is a highly compatible match with great potential for a lasting relationship."
    } else if overall >= 60.0 {
        "This relationship has good potential but will require effort and understanding."
    } else {
        "This relationship will require significant effort and compromise from both partners."
    };
    vec![
        format!("As {user} and {partner}, you have a {overall}% cosmic compatibility."),
        outlook.to_string(),
    ]
}

/// Headline label for a quick result.
pub fn quick_label(overall: f64) -> &'static str {
    if overall >= 90.0 {
        "Cosmic Soulmates"
    } else if overall >= 80.0 {
        "Highly Compatible"
    } else if overall >= 70.0 {
        "Good Match"
    } else if overall >= 60.0 {
        "Moderate Compatibility"
    } else {
        "Challenging Match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_zodiac::ALL_ELEMENTS;

    #[test]
    fn element_challenges_are_symmetric() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_eq!(element_challenges(a, b), element_challenges(b, a));
            }
        }
        assert_eq!(
            element_challenges(Element::Water, Element::Fire)[0],
            "Emotional expression differences"
        );
        assert_eq!(
            element_challenges(Element::Fire, Element::Fire),
            &["Different perspectives on life", "Communication style differences"]
        );
    }

    #[test]
    fn band_text_sizes() {
        assert_eq!(strengths(ScoreBand::Excellent).len(), 4);
        assert_eq!(strengths(ScoreBand::Good).len(), 4);
        assert_eq!(strengths(ScoreBand::Learning).len(), 3);
        assert_eq!(strengths(ScoreBand::Challenging).len(), 2);
        for band in [
            ScoreBand::Excellent,
            ScoreBand::Good,
            ScoreBand::Learning,
            ScoreBand::Challenging,
        ] {
            assert_eq!(advice(band).len(), 2);
            assert_eq!(recommendations(band).len(), 3);
            assert!(!detailed_analysis(band).business.is_empty());
        }
    }

    #[test]
    fn sign_pair_challenges_both_orders() {
        use ZodiacSign::*;
        assert_eq!(sign_pair_challenges(Taurus, Aries), sign_pair_challenges(Aries, Taurus));
        assert_eq!(sign_pair_challenges(Pisces, Aquarius)[0], "Reality vs dreams");
        assert_eq!(sign_pair_challenges(Leo, Aries)[1], "Different life approaches");
    }

    #[test]
    fn quick_advice_formats_whole_percent() {
        let lines = quick_advice("Leo", "Aries", 86.0);
        assert_eq!(lines[0], "As Leo and Aries, you have a 86% cosmic compatibility.");
        assert!(lines[1].starts_with("This is a highly compatible"));
        assert!(quick_advice("Leo", "Aries", 59.0)[1].contains("significant effort"));
    }

    #[test]
    fn quick_labels() {
        assert_eq!(quick_label(90.0), "Cosmic Soulmates");
        assert_eq!(quick_label(89.0), "Highly Compatible");
        assert_eq!(quick_label(60.0), "Moderate Compatibility");
        assert_eq!(quick_label(10.0), "Challenging Match");
        assert_eq!(quick_strengths(75.0)[2], "Patience and compromise will be key");
    }
}
