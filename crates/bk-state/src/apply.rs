//! Committing a chosen assignment.

use tracing::debug;

use bk_core::{BargeId, Target};

use crate::{Action, SimulationState, StateError, StateResult};

/// Reserve `target` for `barge` and append the four actions that serve it.
///
/// Origin: `GoTo(0), SetupInit(Origin), Refuel, SetupEnd(Origin)`.
/// Vessel `v`: `GoTo(position(v)), SetupInit(v), Fuel(v), SetupEnd(v)`.
///
/// # Errors
///
/// [`StateError::UnknownBarge`] / [`StateError::UnknownTarget`] if either id
/// is not part of the instance.  The state is untouched in that case.
pub fn apply(state: &mut SimulationState, barge: BargeId, target: Target) -> StateResult<()> {
    let idx = state
        .instance()
        .barge_idx(barge)
        .ok_or(StateError::UnknownBarge(barge))?;
    let position = state
        .instance()
        .target_position(target)
        .ok_or(StateError::UnknownTarget(target))?;

    let time = state.time();
    let bs = state.barge_mut_at(idx);
    bs.current_vessel_id = Some(target);
    bs.action_queue.extend(Action::sequence_for(target, position));

    debug!(%time, %barge, %target, "assignment committed");
    Ok(())
}

impl SimulationState {
    /// See [`apply`].
    #[inline]
    pub fn apply(&mut self, barge: BargeId, target: Target) -> StateResult<()> {
        apply(self, barge, target)
    }
}
