//! Result types for Ashtakoot (Kundli) matching.

use serde::Serialize;

/// The eight kootas, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    Graha,
    Gana,
    Rashi,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::Graha,
    Koota::Gana,
    Koota::Rashi,
    Koota::Nadi,
];

/// Sum of every koota maximum.
pub const MAX_GUNA: f64 = 36.0;

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::Graha => "Graha",
            Self::Gana => "Gana",
            Self::Rashi => "Rashi",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points for this koota (1..=8).
    pub const fn max_points(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::Graha => 5.0,
            Self::Gana => 6.0,
            Self::Rashi => 7.0,
            Self::Nadi => 8.0,
        }
    }
}

/// Points per koota. Tara can be fractional (1.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AshtakootScores {
    pub varna: f64,
    pub vashya: f64,
    pub tara: f64,
    pub yoni: f64,
    pub graha: f64,
    pub gana: f64,
    pub rashi: f64,
    pub nadi: f64,
}

impl AshtakootScores {
    pub const fn get(&self, koota: Koota) -> f64 {
        match koota {
            Koota::Varna => self.varna,
            Koota::Vashya => self.vashya,
            Koota::Tara => self.tara,
            Koota::Yoni => self.yoni,
            Koota::Graha => self.graha,
            Koota::Gana => self.gana,
            Koota::Rashi => self.rashi,
            Koota::Nadi => self.nadi,
        }
    }

    /// Total guna, 0..=36.
    pub fn total(&self) -> f64 {
        ALL_KOOTAS.iter().map(|&k| self.get(k)).sum()
    }
}

/// Banding of a total guna score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GunaBand {
    /// 28 and above.
    Excellent,
    /// 24 up to 28.
    #[serde(rename = "Very Good")]
    VeryGood,
    /// 18 up to 24.
    Good,
    /// 12 up to 18.
    Average,
    /// Below 12.
    Poor,
}

impl GunaBand {
    pub fn from_guna(guna: f64) -> Self {
        if guna >= 28.0 {
            Self::Excellent
        } else if guna >= 24.0 {
            Self::VeryGood
        } else if guna >= 18.0 {
            Self::Good
        } else if guna >= 12.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

/// Kundli matching result for a sign pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KundliMatchingScore {
    /// Sum of `detailed_scores`.
    pub guna: f64,
    pub compatibility: GunaBand,
    pub mangal_dosha: bool,
    pub recommendations: Vec<String>,
    pub detailed_scores: AshtakootScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxima_sum_to_36() {
        let sum: f64 = ALL_KOOTAS.iter().map(|k| k.max_points()).sum();
        assert_eq!(sum, MAX_GUNA);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(GunaBand::from_guna(28.0), GunaBand::Excellent);
        assert_eq!(GunaBand::from_guna(27.5), GunaBand::VeryGood);
        assert_eq!(GunaBand::from_guna(24.0), GunaBand::VeryGood);
        assert_eq!(GunaBand::from_guna(18.0), GunaBand::Good);
        assert_eq!(GunaBand::from_guna(17.5), GunaBand::Average);
        assert_eq!(GunaBand::from_guna(12.0), GunaBand::Average);
        assert_eq!(GunaBand::from_guna(11.5), GunaBand::Poor);
    }

    #[test]
    fn very_good_serializes_with_space() {
        assert_eq!(
            serde_json::to_value(GunaBand::VeryGood).unwrap(),
            serde_json::json!("Very Good")
        );
        assert_eq!(GunaBand::VeryGood.name(), "Very Good");
    }
}
