//! Run-level settings.

use bk_policy::PolicyKind;

use crate::{SimError, SimResult};

/// How a simulation run is driven.
///
/// The port itself (tides, flow rate, setup times) lives in the
/// [`Instance`][bk_model::Instance]; this only covers choices made per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: PolicyKind,

    /// Seed for randomised policies.  Trial `i` of a batch derives its own
    /// stream from this via [`SimRng::for_trial`][bk_core::SimRng::for_trial].
    pub seed: u64,

    /// Independent trials for randomised policies; the median one is kept.
    pub trials: u64,

    /// Write every `snapshot_interval`-th recorded minute to output.
    pub snapshot_interval: u64,
}

impl SimConfig {
    /// Three random runs, keep the median.
    pub const DEFAULT_TRIALS: u64 = 3;

    /// Rejects zero trial counts and zero snapshot intervals.
    pub fn validate(&self) -> SimResult<()> {
        if self.trials == 0 {
            return Err(SimError::Config("trials must be at least 1".into()));
        }
        if self.snapshot_interval == 0 {
            return Err(SimError::Config("snapshot_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// Trials actually run: deterministic policies need only one.
    pub fn effective_trials(&self) -> u64 {
        match self.policy {
            PolicyKind::Greedy => 1,
            PolicyKind::Random => self.trials,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy:            PolicyKind::Greedy,
            seed:              0,
            trials:            Self::DEFAULT_TRIALS,
            snapshot_interval: 1,
        }
    }
}
