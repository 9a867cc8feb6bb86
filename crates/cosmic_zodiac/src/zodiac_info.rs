//! Static zodiac reference table.
//!
//! One record per sign: glyph, element, quality, ruling planet, colour,
//! five traits, four curated best matches and the human-readable date range.
//! The best-match list is informational only; scoring never reads it.

use serde::Serialize;

use crate::elements::{Element, Planet, Quality};
use crate::sign::ZodiacSign;

/// Reference record for a single sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacInfo {
    pub sign: ZodiacSign,
    /// Unicode zodiac glyph.
    pub symbol: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub ruling_planet: Planet,
    pub color: &'static str,
    pub traits: [&'static str; 5],
    /// Curated best matches, most favoured first.
    pub compatibility: [ZodiacSign; 4],
    pub date_range: &'static str,
}

use Element::{Air, Earth, Fire, Water};
use Quality::{Cardinal, Fixed, Mutable};
use ZodiacSign::*;

/// Reference table indexed by `ZodiacSign::index()`.
static ZODIAC_TABLE: [ZodiacInfo; 12] = [
    ZodiacInfo {
        sign: Aries,
        symbol: "\u{2648}",
        element: Fire,
        quality: Cardinal,
        ruling_planet: Planet::Mars,
        color: "Red",
        traits: ["Energetic", "Courageous", "Independent", "Competitive", "Impulsive"],
        compatibility: [Leo, Sagittarius, Gemini, Aquarius],
        date_range: "March 21 - April 19",
    },
    ZodiacInfo {
        sign: Taurus,
        symbol: "\u{2649}",
        element: Earth,
        quality: Fixed,
        ruling_planet: Planet::Venus,
        color: "Green",
        traits: ["Reliable", "Patient", "Practical", "Devoted", "Stubborn"],
        compatibility: [Virgo, Capricorn, Cancer, Pisces],
        date_range: "April 20 - May 20",
    },
    ZodiacInfo {
        sign: Gemini,
        symbol: "\u{264A}",
        element: Air,
        quality: Mutable,
        ruling_planet: Planet::Mercury,
        color: "Yellow",
        traits: ["Curious", "Adaptable", "Communicative", "Witty", "Indecisive"],
        compatibility: [Libra, Aquarius, Aries, Leo],
        date_range: "May 21 - June 20",
    },
    ZodiacInfo {
        sign: Cancer,
        symbol: "\u{264B}",
        element: Water,
        quality: Cardinal,
        ruling_planet: Planet::Moon,
        color: "Silver",
        traits: ["Emotional", "Intuitive", "Protective", "Nurturing", "Moody"],
        compatibility: [Scorpio, Pisces, Taurus, Virgo],
        date_range: "June 21 - July 22",
    },
    ZodiacInfo {
        sign: Leo,
        symbol: "\u{264C}",
        element: Fire,
        quality: Fixed,
        ruling_planet: Planet::Sun,
        color: "Gold",
        traits: ["Confident", "Generous", "Creative", "Dramatic", "Arrogant"],
        compatibility: [Aries, Sagittarius, Gemini, Libra],
        date_range: "July 23 - August 22",
    },
    ZodiacInfo {
        sign: Virgo,
        symbol: "\u{264D}",
        element: Earth,
        quality: Mutable,
        ruling_planet: Planet::Mercury,
        color: "Navy Blue",
        traits: ["Analytical", "Practical", "Helpful", "Perfectionist", "Critical"],
        compatibility: [Taurus, Capricorn, Cancer, Scorpio],
        date_range: "August 23 - September 22",
    },
    ZodiacInfo {
        sign: Libra,
        symbol: "\u{264E}",
        element: Air,
        quality: Cardinal,
        ruling_planet: Planet::Venus,
        color: "Pink",
        traits: ["Diplomatic", "Charming", "Balanced", "Social", "Indecisive"],
        compatibility: [Gemini, Aquarius, Leo, Sagittarius],
        date_range: "September 23 - October 22",
    },
    ZodiacInfo {
        sign: Scorpio,
        symbol: "\u{264F}",
        element: Water,
        quality: Fixed,
        ruling_planet: Planet::Pluto,
        color: "Deep Red",
        traits: ["Intense", "Passionate", "Mysterious", "Loyal", "Jealous"],
        compatibility: [Cancer, Pisces, Virgo, Capricorn],
        date_range: "October 23 - November 21",
    },
    ZodiacInfo {
        sign: Sagittarius,
        symbol: "\u{2650}",
        element: Fire,
        quality: Mutable,
        ruling_planet: Planet::Jupiter,
        color: "Purple",
        traits: ["Adventurous", "Optimistic", "Philosophical", "Independent", "Impatient"],
        compatibility: [Aries, Leo, Libra, Aquarius],
        date_range: "November 22 - December 21",
    },
    ZodiacInfo {
        sign: Capricorn,
        symbol: "\u{2651}",
        element: Earth,
        quality: Cardinal,
        ruling_planet: Planet::Saturn,
        color: "Brown",
        traits: ["Ambitious", "Disciplined", "Practical", "Responsible", "Pessimistic"],
        compatibility: [Taurus, Virgo, Scorpio, Pisces],
        date_range: "December 22 - January 19",
    },
    ZodiacInfo {
        sign: Aquarius,
        symbol: "\u{2652}",
        element: Air,
        quality: Fixed,
        ruling_planet: Planet::Uranus,
        color: "Turquoise",
        traits: ["Independent", "Innovative", "Humanitarian", "Eccentric", "Detached"],
        compatibility: [Gemini, Libra, Aries, Sagittarius],
        date_range: "January 20 - February 18",
    },
    ZodiacInfo {
        sign: Pisces,
        symbol: "\u{2653}",
        element: Water,
        quality: Mutable,
        ruling_planet: Planet::Neptune,
        color: "Sea Green",
        traits: ["Compassionate", "Artistic", "Intuitive", "Gentle", "Escapist"],
        compatibility: [Cancer, Scorpio, Taurus, Capricorn],
        date_range: "February 19 - March 20",
    },
];

/// Reference record for a sign.
pub fn zodiac_info(sign: ZodiacSign) -> &'static ZodiacInfo {
    &ZODIAC_TABLE[sign.index() as usize]
}

/// Curated best matches for a sign, most favoured first.
pub fn best_matches(sign: ZodiacSign) -> &'static [ZodiacSign; 4] {
    &zodiac_info(sign).compatibility
}
