//! Compatibility scoring for Cosmic Connections.
//!
//! This crate provides:
//! - The static base, element, quality and ruling-planet tables
//! - Detailed and quick sign-pair compatibility with narrative text
//! - Sign-level Ashtakoot (Kundli) matching with Mangal Dosha
//!
//! Scores carry bounded random offsets drawn from a caller-supplied
//! [`JitterSource`]; pass a seeded RNG or [`FixedJitter`] for repeatable
//! results.

pub mod compatibility;
pub mod jitter;
pub mod kundli;
pub mod kundli_types;
pub mod narrative;
pub mod quick;
pub mod score_types;
pub mod tables;

pub use compatibility::{BirthTimes, calculate_detailed_compatibility};
pub use jitter::{FixedJitter, Jitter, JitterSource, ScriptedJitter, clamp_percent};
pub use kundli::{
    Gana, Nadi, VashyaGroup, calculate_kundli_matching, gana, kundli_recommendations,
    mangal_dosha, nadi, vashya_group,
};
pub use kundli_types::{ALL_KOOTAS, AshtakootScores, GunaBand, Koota, KundliMatchingScore, MAX_GUNA};
pub use narrative::quick_label;
pub use quick::{calculate_quick_compatibility, fallback_challenges, quick_from_base};
pub use score_types::{
    CompatibilityScore, DetailedAnalysis, DetailedCompatibilityScore, OVERALL_WEIGHTS,
    OverallWeights, ScoreBand, weighted_overall,
};
pub use tables::{
    BaseLookup, NEUTRAL_BASE_SCORE, UnknownSignPolicy, base_score, base_score_lookup,
    element_score, planetary_score, quality_score, rank_partners,
};
