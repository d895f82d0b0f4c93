//! RNG module - injectable random sources for piece selection
//!
//! Piece selection is naive: every spawn picks one of the seven templates
//! uniformly and independently. The board only sees the [`RandomSource`]
//! capability, so tests can substitute a scripted sequence.
//!
//! Also provides a simple LCG for deterministic runs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Capability to pick one of `n` options.
pub trait RandomSource {
    /// Return an index in `0..n`. `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl RandomSource for SimpleRng {
    fn pick(&mut self, n: usize) -> usize {
        self.next_range(n as u32) as usize
    }
}

/// PCG-backed source used for normal play.
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg64,
}

impl PcgSource {
    /// Seed from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgSource {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Replays a fixed cycle of indices (each reduced modulo `n`).
///
/// Used to script exact piece sequences in tests and benchmarks.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        let picks = picks.into();
        assert!(!picks.is_empty(), "scripted source needs at least one pick");
        Self { picks, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, n: usize) -> usize {
        let v = self.picks[self.next % self.picks.len()];
        self.next = self.next.wrapping_add(1);
        v % n
    }
}
