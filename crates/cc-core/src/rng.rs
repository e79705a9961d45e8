//! Deterministic random streams for the simulator.
//!
//! # Determinism strategy
//!
//! A run draws from exactly one stream, in a fixed order: one uniform real
//! per step for the arrival decision, then one integer per assignment for
//! the service duration.  The engine never seeds or reseeds a stream; the
//! caller creates a [`SimRng`] once (usually at process start) and lends it
//! to every run that should share it.
//!
//! Independent streams for concurrent work are derived with
//! [`SimRng::child`]:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The two draws the engine needs from a random stream.
///
/// Implemented by [`SimRng`] for real runs; tests implement it with scripted
/// sequences to pin down exact step-by-step behaviour.
pub trait RandomSource {
    /// A uniformly distributed real in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A uniformly distributed integer in `[min, max]` (both inclusive).
    ///
    /// Callers guarantee `min <= max`.
    fn uniform_inclusive(&mut self, min: u64, max: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    #[inline]
    fn uniform_inclusive(&mut self, min: u64, max: u64) -> u64 {
        (**self).uniform_inclusive(min, max)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded process-level stream.
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, give each worker its own `SimRng` derived from
/// this one with [`child`](Self::child).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, useful for
    /// seeding per-worker streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn uniform_inclusive(&mut self, min: u64, max: u64) -> u64 {
        self.0.gen_range(min..=max)
    }
}
