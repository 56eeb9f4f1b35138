//! Deterministic random number generation
//!
//! Every simulated day gets its own ChaCha stream derived from (seed, day),
//! so replaying a world from the same seed reproduces it exactly.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random draws consumed by the tree systems.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;
    /// Uniform integer in `[lo, hi)`.
    fn int_range(&mut self, lo: i32, hi: i32) -> i32;
}

impl RandomSource for ChaCha8Rng {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn int_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..hi)
    }
}

/// Replays fixed draws. Once a queue runs dry, uniform draws repeat the
/// fallback value and integer draws return the low bound. A scripted integer
/// outside the requested range panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    uniforms: VecDeque<f64>,
    ints: VecDeque<i32>,
    fallback: f64,
    uniform_draws: usize,
}

impl ScriptedRng {
    /// Every uniform draw returns `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            fallback: value,
            ..Self::default()
        }
    }

    pub fn with_uniforms(mut self, draws: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(draws);
        self
    }

    pub fn with_ints(mut self, draws: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(draws);
        self
    }

    pub fn uniform_draws(&self) -> usize {
        self.uniform_draws
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        self.uniform_draws += 1;
        self.uniforms.pop_front().unwrap_or(self.fallback)
    }

    fn int_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        match self.ints.pop_front() {
            Some(value) => {
                assert!(
                    (lo..hi).contains(&value),
                    "scripted int {value} outside {lo}..{hi}"
                );
                value
            }
            None => lo,
        }
    }
}

pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream used for every draw of the given day.
    pub fn day_rng(&self, day: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.derive_seed(day))
    }

    fn derive_seed(&self, day: u64) -> u64 {
        let mut seed = self.master_seed;
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed ^= day.wrapping_mul(69069);
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed
    }
}

impl Default for RngManager {
    fn default() -> Self {
        Self::new(42)
    }
}
