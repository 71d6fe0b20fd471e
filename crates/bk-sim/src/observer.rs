//! Simulation observer trait for progress reporting and data collection.

use bk_core::Minute;
use bk_state::{Candidate, SimulationState};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the minute loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — assignment log
///
/// ```rust,ignore
/// struct AssignmentLog(Vec<(Minute, Candidate)>);
///
/// impl SimObserver for AssignmentLog {
///     fn on_assignment(&mut self, time: Minute, candidate: Candidate) {
///         self.0.push((time, candidate));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each minute, before anything is recorded.
    fn on_minute_start(&mut self, _time: Minute) {}

    /// Called once per committed assignment.
    fn on_assignment(&mut self, _time: Minute, _candidate: Candidate) {}

    /// Called with each recorded state, in order.  These are exactly the
    /// states the run returns.
    fn on_snapshot(&mut self, _state: &SimulationState) {}

    /// Called once after the last minute with the state one past the horizon.
    fn on_sim_end(&mut self, _final_state: &SimulationState) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
