//! Deterministic simulation-level RNG.
//!
//! Randomised decision policies never touch a global or thread-local
//! generator.  Each run owns a `SimRng` built from an explicit seed, so
//! several independent trials give the same results whatever order (or
//! thread) they run in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG owned by one simulation run.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// RNG for trial number `trial` of a batch seeded with `base_seed`.
    ///
    /// Depends only on its two arguments, never on how many trials ran
    /// before it.
    pub fn for_trial(base_seed: u64, trial: u64) -> Self {
        SimRng::new(base_seed ^ trial.wrapping_mul(MIXING_CONSTANT))
    }

    /// Uniform index in `0..len`.  Returns `None` when `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
