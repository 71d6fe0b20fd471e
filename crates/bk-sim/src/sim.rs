//! The `Simulation` struct and its minute loop.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use bk_core::Minute;
use bk_model::Instance;
use bk_policy::DecisionPolicy;
use bk_state::SimulationState;

use crate::{NoopObserver, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Simulation<P>` owns the current state and the decision policy and drives
/// the three-phase minute loop described in the crate docs until the clock
/// passes the latest vessel departure.
///
/// Create via [`Simulation::new`] or [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: DecisionPolicy> {
    state:   SimulationState,
    policy:  P,
    horizon: Minute,
}

impl<P: DecisionPolicy> Simulation<P> {
    /// Start at minute 0 with every barge full and idle at the origin.
    ///
    /// Fails with [`SimError::EmptyInstance`] when there are no vessels.
    pub fn new(instance: Arc<Instance>, policy: P) -> SimResult<Self> {
        let horizon = instance.max_departure().ok_or(SimError::EmptyInstance)?;
        Ok(Self {
            state: SimulationState::new(instance),
            policy,
            horizon,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The state about to be processed (one past the horizon after `run`).
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Last minute that is processed: the latest vessel departure.
    pub fn horizon(&self) -> Minute {
        self.horizon
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current minute through the horizon and return every
    /// recorded state, one per minute, in order.
    ///
    /// Use [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<SimulationState>> {
        let instance = self.state.instance().clone();
        let start = self.state.time();
        info!(
            policy  = self.policy.name(),
            vessels = instance.vessels().len(),
            barges  = instance.barges().len(),
            horizon = %self.horizon,
            demand  = instance.total_demand(),
            "simulation started"
        );

        let minutes = self.horizon.0.saturating_sub(start.0) + 1;
        let mut history = Vec::with_capacity(minutes as usize);
        while self.state.time() <= self.horizon {
            history.push(self.step(observer)?);
        }

        observer.on_sim_end(&self.state);
        info!(
            minutes   = history.len(),
            delivered = self.state.delivered_fuel(),
            remaining = self.state.remaining_demand(),
            "simulation finished"
        );
        Ok(history)
    }

    /// Process exactly one minute and return the state recorded for it.
    ///
    /// Ignores the horizon; useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimulationState> {
        let now = self.state.time();
        observer.on_minute_start(now);

        // ── Phase 1: record ───────────────────────────────────────────────
        let recorded = self.state.clone();
        observer.on_snapshot(&recorded);
        self.warn_departures(now);

        // ── Phase 2: drain assignments ────────────────────────────────────
        let assigned = self.assign_all(observer)?;

        debug_assert!(
            self.state.check_invariants().is_empty(),
            "invariants violated at {now}: {:?}",
            self.state.check_invariants()
        );

        // ── Phase 3: advance ──────────────────────────────────────────────
        self.state = self.state.advance();
        trace!(time = %now, assigned, "minute processed");

        Ok(recorded)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Commit assignments until the candidate list runs dry.
    ///
    /// Terminates: every commit reserves an idle barge, and a reserved barge
    /// is never a candidate again this minute.
    fn assign_all<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.state.time();
        let mut assigned = 0;

        loop {
            let candidates = self.state.candidates();
            if candidates.is_empty() {
                break;
            }
            let choice = self.policy.choose(&candidates, &self.state)?;
            self.state.apply(choice.barge, choice.target)?;
            observer.on_assignment(now, choice);
            assigned += 1;
        }

        if assigned > 0 {
            debug!(time = %now, assigned, "assignments drained");
        }
        Ok(assigned)
    }

    fn warn_departures(&self, now: Minute) {
        let instance = self.state.instance();
        for (vessel, vs) in instance.vessels().iter().zip(self.state.vessel_states()) {
            if vessel.departure_time == now && vs.current_fuel_demand > 0.0 {
                warn!(
                    time    = %now,
                    vessel  = %vessel.id,
                    unmet   = vs.current_fuel_demand,
                    "vessel departs with unmet demand"
                );
            }
        }
    }
}

/// Run `policy` over `instance` with no observer.
pub fn run_simulation<P: DecisionPolicy>(
    instance: Arc<Instance>,
    policy:   P,
) -> SimResult<Vec<SimulationState>> {
    Simulation::new(instance, policy)?.run(&mut NoopObserver)
}
