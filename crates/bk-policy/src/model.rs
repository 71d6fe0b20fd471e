//! The `DecisionPolicy` trait — the extension point for assignment strategies.

use std::fmt;
use std::str::FromStr;

use bk_state::{Candidate, SimulationState};

use crate::{GreedyPolicy, PolicyResult, RandomPolicy};

/// Picks one candidate out of the legal set for the current minute.
///
/// # Contract
///
/// `candidates` is the unmodified output of [`bk_state::candidates`] for
/// `state`.  An empty slice is a caller error and yields
/// [`PolicyError::NoCandidates`][crate::PolicyError::NoCandidates].
///
/// # Example
///
/// ```rust,ignore
/// struct FirstCome;
///
/// impl DecisionPolicy for FirstCome {
///     fn choose(&mut self, candidates: &[Candidate], _state: &SimulationState) -> PolicyResult<Candidate> {
///         candidates.first().copied().ok_or(PolicyError::NoCandidates)
///     }
///     fn name(&self) -> &str { "first-come" }
/// }
/// ```
pub trait DecisionPolicy {
    fn choose(&mut self, candidates: &[Candidate], state: &SimulationState) -> PolicyResult<Candidate>;

    /// Short label used in logs and output file names.
    fn name(&self) -> &str;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    #[inline]
    fn choose(&mut self, candidates: &[Candidate], state: &SimulationState) -> PolicyResult<Candidate> {
        (**self).choose(candidates, state)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The built-in policies, selectable by name (`greedy`, `random`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Greedy,
    Random,
}

impl PolicyKind {
    /// Instantiate the policy; `seed` is ignored by deterministic policies.
    pub fn build(self, seed: u64) -> Box<dyn DecisionPolicy + Send> {
        match self {
            PolicyKind::Greedy => Box::new(GreedyPolicy),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Greedy => "greedy",
            PolicyKind::Random => "random",
        })
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(PolicyKind::Greedy),
            "random" => Ok(PolicyKind::Random),
            other    => Err(format!("unknown policy {other:?} (expected \"greedy\" or \"random\")")),
        }
    }
}
