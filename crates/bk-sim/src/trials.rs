//! Independent seeded random trials and median selection.

use std::sync::Arc;

use tracing::info;

use bk_core::SimRng;
use bk_model::Instance;
use bk_policy::RandomPolicy;
use bk_state::SimulationState;

use crate::{NoopObserver, SimResult, Simulation};

/// Result of one random trial.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    /// Trial number within the batch, `0..n`.
    pub trial: u64,
    /// One recorded state per minute.
    pub history: Vec<SimulationState>,
    /// The state one past the horizon, after the last minute's work.
    pub final_state: SimulationState,
}

impl TrialOutcome {
    /// Tons still wanted in the last recorded minute (the horizon).
    pub fn remaining_demand(&self) -> f64 {
        self.history
            .last()
            .unwrap_or(&self.final_state)
            .remaining_demand()
    }
}

/// Run `trials` random-policy simulations of `instance`.
///
/// Trial `i` draws from [`SimRng::for_trial(base_seed, i)`][SimRng::for_trial],
/// so each trial is reproducible on its own and the batch gives the same
/// outcomes in any execution order.  With the `parallel` feature the trials
/// run on Rayon's thread pool.  Outcomes are returned in trial order.
pub fn run_trials(
    instance:  &Arc<Instance>,
    base_seed: u64,
    trials:    u64,
) -> SimResult<Vec<TrialOutcome>> {
    let run_one = |trial: u64| -> SimResult<TrialOutcome> {
        let policy = RandomPolicy::from_rng(SimRng::for_trial(base_seed, trial));
        let mut sim = Simulation::new(Arc::clone(instance), policy)?;
        let history = sim.run(&mut NoopObserver)?;
        Ok(TrialOutcome {
            trial,
            history,
            final_state: sim.state().clone(),
        })
    };

    #[cfg(feature = "parallel")]
    let outcomes: SimResult<Vec<TrialOutcome>> = {
        use rayon::prelude::*;
        (0..trials).into_par_iter().map(run_one).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: SimResult<Vec<TrialOutcome>> = (0..trials).map(run_one).collect();

    let outcomes = outcomes?;
    info!(trials, base_seed, "random trials finished");
    Ok(outcomes)
}

/// The trial with the median remaining demand at the horizon.
///
/// Outcomes are ranked by [`TrialOutcome::remaining_demand`] (the last
/// recorded minute, not the state after it) with a stable sort, and the one
/// at index `len / 2` is returned: the middle for odd counts, the upper of
/// the two middles for even counts.  `None` for an empty slice.
pub fn median_trial(outcomes: &[TrialOutcome]) -> Option<&TrialOutcome> {
    let mut ranked: Vec<&TrialOutcome> = outcomes.iter().collect();
    ranked.sort_by(|a, b| a.remaining_demand().total_cmp(&b.remaining_demand()));
    ranked.get(ranked.len() / 2).copied()
}
