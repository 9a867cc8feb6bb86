//! Random variation applied to compatibility scores.
//!
//! Scores take a small, bounded random offset. The randomness comes from a
//! [`JitterSource`] the caller passes in, so a caller that needs repeatable
//! results can pass a seeded RNG or one of the fixed sources below.

use rand::{Rng, RngCore};

/// Source of uniform integers in `[0, span)`.
pub trait JitterSource {
    /// Uniform draw in `[0, span)`. `span` is never zero for the built-in spans.
    fn below(&mut self, span: u32) -> u32;
}

impl<R: RngCore + ?Sized> JitterSource for R {
    fn below(&mut self, span: u32) -> u32 {
        if span == 0 {
            return 0;
        }
        self.gen_range(0..span)
    }
}

/// Always draws the same raw value, clamped into `[0, span)`.
///
/// `FixedJitter(0)` gives every offset its minimum and
/// `FixedJitter(u32::MAX)` gives every offset its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn below(&mut self, span: u32) -> u32 {
        self.0.min(span.saturating_sub(1))
    }
}

/// Replays a list of raw draws in order, cycling when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedJitter {
    draws: Vec<u32>,
    pos: usize,
}

impl ScriptedJitter {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, pos: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl JitterSource for ScriptedJitter {
    fn below(&mut self, span: u32) -> u32 {
        if self.draws.is_empty() {
            return 0;
        }
        let raw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        raw.min(span.saturating_sub(1))
    }
}

/// Integer offset drawn uniformly from `[-span/2, span/2 - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    span: u32,
}

impl Jitter {
    pub const fn with_span(span: u32) -> Self {
        Self { span }
    }

    /// Smallest offset this jitter can produce.
    pub const fn min(self) -> i32 {
        -((self.span / 2) as i32)
    }

    /// Largest offset this jitter can produce.
    pub const fn max(self) -> i32 {
        self.span as i32 - (self.span / 2) as i32 - 1
    }

    /// Draw one offset from `source`.
    pub fn draw<J: JitterSource + ?Sized>(self, source: &mut J) -> f64 {
        f64::from(source.below(self.span)) - f64::from(self.span / 2)
    }
}

pub const SUN_JITTER: Jitter = Jitter::with_span(10);
pub const MOON_JITTER: Jitter = Jitter::with_span(8);
pub const RISING_JITTER: Jitter = Jitter::with_span(6);
pub const VENUS_JITTER: Jitter = Jitter::with_span(12);
pub const MARS_JITTER: Jitter = Jitter::with_span(8);
pub const COMMUNICATION_JITTER: Jitter = Jitter::with_span(10);
pub const EMOTIONAL_JITTER: Jitter = Jitter::with_span(8);
pub const PHYSICAL_JITTER: Jitter = Jitter::with_span(12);
pub const SPIRITUAL_JITTER: Jitter = Jitter::with_span(6);

/// Clamp a percentage score into `[0, 100]`.
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_extremes_hit_bounds() {
        assert_eq!(SUN_JITTER.draw(&mut FixedJitter(0)), -5.0);
        assert_eq!(SUN_JITTER.draw(&mut FixedJitter(u32::MAX)), 4.0);
        assert_eq!(VENUS_JITTER.draw(&mut FixedJitter(0)), -6.0);
        assert_eq!(VENUS_JITTER.draw(&mut FixedJitter(u32::MAX)), 5.0);
        assert_eq!(SPIRITUAL_JITTER.min(), -3);
        assert_eq!(SPIRITUAL_JITTER.max(), 2);
    }

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for jitter in [SUN_JITTER, MOON_JITTER, RISING_JITTER, VENUS_JITTER] {
            for _ in 0..500 {
                let v = jitter.draw(&mut rng);
                assert!(v >= f64::from(jitter.min()) && v <= f64::from(jitter.max()));
            }
        }
    }

    #[test]
    fn scripted_cycles_and_clamps() {
        let mut s = ScriptedJitter::new(vec![1, 99]);
        assert_eq!(s.below(10), 1);
        assert_eq!(s.below(10), 9);
        assert_eq!(s.below(10), 1);
        assert_eq!(s.consumed(), 3);
        assert_eq!(ScriptedJitter::new(Vec::new()).below(5), 0);
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_percent(104.0), 100.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(55.5), 55.5);
    }
}
