// seedrand_core/src/generator.rs

//! The xorshift32 generator and its range-mapping operations.
//!
//! Every public draw advances the register exactly once and then derives its
//! result from the new register value, so two generators built from the same
//! seed stay in lockstep as long as they are asked for the same sequence of
//! operations.

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, StateError};

// --- Register Layout Constants ---
const SEED_HIGH_BITS: u32 = 0xFFFF_0000;
const SEED_LOW_MASK: u32 = 0x0000_FFFF;
const NON_NEGATIVE_MASK: u32 = 0x7FFF_FFFF;
const SIGN_BIT: u32 = 0x8000_0000;

/// 2^31, the divisor that maps a 31-bit draw onto `[0, 1)`.
const UNIT_DIVISOR: f64 = 2_147_483_648.0;

// =========================================================================
// == Generator ==
// =========================================================================

/// A deterministic, seedable xorshift32 pseudo-random number generator.
///
/// The whole state is one nonzero 32-bit register. Cloning a generator forks
/// the stream: the clone yields the same future values as the original.
///
/// Bounded integer draws use `register % span` and are therefore slightly
/// biased for spans that are not powers of two. The `_unbiased` variants use
/// rejection sampling instead and produce a different stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SeededRandomGenerator {
    state: u32,
}

impl SeededRandomGenerator {
    /// Creates a generator from a seed.
    ///
    /// Only the low 16 bits of `seed` are used; the upper half of the register
    /// is forced to `0xFFFF`, which keeps the register nonzero. Two seeds that
    /// agree modulo 2^16 produce identical streams.
    pub fn new(seed: i32) -> Self {
        Self {
            state: SEED_HIGH_BITS | (seed as u32 & SEED_LOW_MASK),
        }
    }

    /// Restores a generator from a register previously read with [`state`].
    ///
    /// [`state`]: SeededRandomGenerator::state
    pub fn from_state(state: u32) -> Result<Self, StateError> {
        if state == 0 {
            return Err(StateError::ZeroState);
        }
        Ok(Self { state })
    }

    /// The current register value. Never zero.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the register by one xorshift32 step and returns the new value.
    #[inline]
    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Raw 32-bit output; used by the `rand_core` adapter.
    #[inline]
    pub(crate) fn next_raw(&mut self) -> u32 {
        self.step()
    }

    // --- Integer Draws ---

    /// A signed integer spanning the full `i32` range (the register's bits).
    pub fn next_int(&mut self) -> i32 {
        self.step() as i32
    }

    /// An integer in `[0, max_exclusive)`.
    ///
    /// # Panics
    /// Panics if `max_exclusive <= 0`. Use [`try_next_int_below`] to validate
    /// instead.
    ///
    /// [`try_next_int_below`]: SeededRandomGenerator::try_next_int_below
    pub fn next_int_below(&mut self, max_exclusive: i32) -> i32 {
        assert!(
            max_exclusive > 0,
            "next_int_below: empty range [0, {})",
            max_exclusive
        );
        ((self.step() & NON_NEGATIVE_MASK) % max_exclusive as u32) as i32
    }

    /// An integer in `[min_inclusive, max_exclusive)`.
    ///
    /// The span is computed in 64 bits, so ranges wider than `i32::MAX` do
    /// not overflow. Only 31 register bits feed the offset, which means
    /// offsets above 2^31 are never produced for such wide ranges.
    ///
    /// # Panics
    /// Panics if `max_exclusive <= min_inclusive`.
    pub fn next_int_range(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        assert!(
            max_exclusive > min_inclusive,
            "next_int_range: empty range [{}, {})",
            min_inclusive,
            max_exclusive
        );
        let span = int_span(min_inclusive, max_exclusive);
        let offset = (self.step() & NON_NEGATIVE_MASK) as u64 % span;
        (min_inclusive as i64 + offset as i64) as i32
    }

    /// Validating form of [`next_int_below`]. No draw is consumed on error.
    ///
    /// [`next_int_below`]: SeededRandomGenerator::next_int_below
    pub fn try_next_int_below(&mut self, max_exclusive: i32) -> Result<i32, RangeError> {
        RangeError::check_int_range(0, max_exclusive)?;
        Ok(self.next_int_below(max_exclusive))
    }

    /// Validating form of [`next_int_range`]. No draw is consumed on error.
    ///
    /// [`next_int_range`]: SeededRandomGenerator::next_int_range
    pub fn try_next_int_range(
        &mut self,
        min_inclusive: i32,
        max_exclusive: i32,
    ) -> Result<i32, RangeError> {
        RangeError::check_int_range(min_inclusive, max_exclusive)?;
        Ok(self.next_int_range(min_inclusive, max_exclusive))
    }

    /// Like [`next_int_below`], but every value in the range is equally likely.
    ///
    /// May advance the register more than once per call.
    ///
    /// [`next_int_below`]: SeededRandomGenerator::next_int_below
    ///
    /// # Panics
    /// Panics if `max_exclusive <= 0`.
    pub fn next_int_below_unbiased(&mut self, max_exclusive: i32) -> i32 {
        assert!(
            max_exclusive > 0,
            "next_int_below_unbiased: empty range [0, {})",
            max_exclusive
        );
        self.unbiased_offset(max_exclusive as u64) as i32
    }

    /// Like [`next_int_range`], but every value in the range is equally likely.
    ///
    /// [`next_int_range`]: SeededRandomGenerator::next_int_range
    ///
    /// # Panics
    /// Panics if `max_exclusive <= min_inclusive`.
    pub fn next_int_range_unbiased(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        assert!(
            max_exclusive > min_inclusive,
            "next_int_range_unbiased: empty range [{}, {})",
            min_inclusive,
            max_exclusive
        );
        let offset = self.unbiased_offset(int_span(min_inclusive, max_exclusive));
        (min_inclusive as i64 + offset as i64) as i32
    }

    /// Rejection sampling over `[0, span)`.
    ///
    /// Spans up to 2^31 draw from the same 31 bits as the biased forms, so a
    /// power-of-two span reproduces the biased stream exactly. Wider spans use
    /// the whole register.
    fn unbiased_offset(&mut self, span: u64) -> u64 {
        let (width, mask) = if span <= 1 << 31 {
            (1u64 << 31, NON_NEGATIVE_MASK)
        } else {
            (1u64 << 32, u32::MAX)
        };
        // Draws at or above `zone` would over-represent the low residues.
        let zone = width - width % span;
        loop {
            let draw = (self.step() & mask) as u64;
            if draw < zone {
                return draw % span;
            }
        }
    }

    /// `true` or `false` with equal probability, from the register's top bit.
    pub fn next_bool(&mut self) -> bool {
        self.step() & SIGN_BIT != 0
    }

    // --- Float Draws ---

    /// A float in `[0, 1)`: the register shifted right by one, over 2^31.
    ///
    /// The handful of registers whose quotient rounds up to `1.0` in `f32`
    /// yield the largest `f32` below one instead.
    pub fn next_float(&mut self) -> f32 {
        let unit = self.next_double() as f32;
        clamp_below_f32(unit, 0.0, 1.0)
    }

    /// `next_float() * max_exclusive`.
    ///
    /// For positive `max_exclusive` the result is in `[0, max_exclusive)`.
    /// Other bounds are scaled without validation.
    pub fn next_float_below(&mut self, max_exclusive: f32) -> f32 {
        let value = self.next_float() * max_exclusive;
        if max_exclusive > 0.0 {
            clamp_below_f32(value, 0.0, max_exclusive)
        } else {
            value
        }
    }

    /// `next_float() * (max_exclusive - min_inclusive) + min_inclusive`.
    ///
    /// When `max_exclusive > min_inclusive` the result is kept inside
    /// `[min_inclusive, max_exclusive)`; inverted bounds are mapped by the
    /// same formula without validation.
    pub fn next_float_range(&mut self, min_inclusive: f32, max_exclusive: f32) -> f32 {
        let unit = self.next_float();
        let span = max_exclusive - min_inclusive;
        let value = if span.is_finite() {
            unit * span + min_inclusive
        } else {
            // Finite bounds more than f32::MAX apart; the span only fits in f64.
            (unit as f64 * (max_exclusive as f64 - min_inclusive as f64) + min_inclusive as f64)
                as f32
        };
        if max_exclusive > min_inclusive {
            clamp_below_f32(value, min_inclusive, max_exclusive)
        } else {
            value
        }
    }

    /// Validating form of [`next_float_range`]: both bounds must be finite and
    /// `max_exclusive > min_inclusive`. No draw is consumed on error.
    ///
    /// [`next_float_range`]: SeededRandomGenerator::next_float_range
    pub fn try_next_float_range(
        &mut self,
        min_inclusive: f32,
        max_exclusive: f32,
    ) -> Result<f32, RangeError> {
        RangeError::check_float_range(min_inclusive as f64, max_exclusive as f64)?;
        Ok(self.next_float_range(min_inclusive, max_exclusive))
    }

    /// A double in `[0, 1)` with the same formula as [`next_float`], computed
    /// in 64 bits where it is exact.
    ///
    /// [`next_float`]: SeededRandomGenerator::next_float
    pub fn next_double(&mut self) -> f64 {
        (self.step() >> 1) as f64 / UNIT_DIVISOR
    }

    /// A double in `[min_inclusive, max_exclusive)`.
    pub fn next_double_range(&mut self, min_inclusive: f64, max_exclusive: f64) -> f64 {
        let value = self.next_double() * (max_exclusive - min_inclusive) + min_inclusive;
        if max_exclusive > min_inclusive && value >= max_exclusive {
            largest_below_f64(max_exclusive).max(min_inclusive)
        } else {
            value
        }
    }
}

// =========================================================================
// == Serde & Conversion Glue ==
// =========================================================================

impl TryFrom<u32> for SeededRandomGenerator {
    type Error = StateError;

    fn try_from(state: u32) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl From<SeededRandomGenerator> for u32 {
    fn from(generator: SeededRandomGenerator) -> Self {
        generator.state
    }
}

// =========================================================================
// == Helpers ==
// =========================================================================

/// Width of `[min, max)`; at most `u32::MAX`, so it always fits.
fn int_span(min_inclusive: i32, max_exclusive: i32) -> u64 {
    (max_exclusive as i64 - min_inclusive as i64) as u64
}

/// Pulls `value` back into `[min, max)` when rounding pushed it onto `max`.
fn clamp_below_f32(value: f32, min_inclusive: f32, max_exclusive: f32) -> f32 {
    if value < max_exclusive || !max_exclusive.is_finite() {
        value
    } else {
        largest_below_f32(max_exclusive).max(min_inclusive)
    }
}

/// The largest `f32` strictly less than a finite `x`.
fn largest_below_f32(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

fn largest_below_f64(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}
