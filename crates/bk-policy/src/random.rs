//! Uniform random choice.

use bk_core::SimRng;
use bk_state::{Candidate, SimulationState};

use crate::{DecisionPolicy, PolicyError, PolicyResult};

/// Picks a candidate uniformly at random.
///
/// Owns its RNG: two policies built from the same seed make the same picks
/// when fed the same candidate lists.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: SimRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }

    pub fn from_rng(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn choose(&mut self, candidates: &[Candidate], _state: &SimulationState) -> PolicyResult<Candidate> {
        let idx = self.rng.index(candidates.len()).ok_or(PolicyError::NoCandidates)?;
        Ok(candidates[idx])
    }

    fn name(&self) -> &str {
        "random"
    }
}
