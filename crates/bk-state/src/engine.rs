//! The one-minute time step.

use tracing::{debug, trace};

use bk_core::{ARRIVAL_EPSILON_M, knots_to_m_per_min};
use bk_model::Barge;

use crate::{Action, BargeState, SimulationState};

/// Which setup counter an action advances.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SetupPhase {
    Init,
    End,
}

/// Execute one minute and return the state at `time + 1`.
///
/// Each barge does at most one unit of work on the head of its queue:
///
/// - `GoTo(x)` — sail toward `x` at the loaded speed plus tide, without
///   overshooting; pop once within [`ARRIVAL_EPSILON_M`].
/// - `SetupInit` / `SetupEnd` — count one minute; pop when the count reaches
///   the origin or vessel setup time.  Finishing `SetupEnd` releases the
///   reservation.
/// - `Refuel` — gain one minute of flow, capped at capacity; pop when full.
/// - `Fuel(v)` — move `min(flow, demand, fuel aboard)` tons to `v`; pop when
///   demand is met, the barge is empty, or `v` departs too soon to leave
///   room for unmooring.
///
/// `state` is not modified.
pub fn advance(state: &SimulationState) -> SimulationState {
    let instance = state.instance().clone();
    let params = instance.params();
    let now = state.time();
    let tide = params.tide_speed(now);

    let mut next = state.clone();

    for (idx, barge) in instance.barges().iter().enumerate() {
        let Some(&action) = state.barge_at(idx).action_queue.front() else {
            continue;
        };

        match action {
            Action::GoTo(target) => {
                step_goto(next.barge_mut_at(idx), barge, target, tide);
            }

            Action::SetupInit(target) => {
                step_setup(next.barge_mut_at(idx), params.setup_time(target), SetupPhase::Init);
            }

            Action::SetupEnd(target) => {
                let bs = next.barge_mut_at(idx);
                if step_setup(bs, params.setup_time(target), SetupPhase::End) {
                    bs.current_vessel_id = None;
                    debug!(time = %now, barge = %barge.id, %target, "reservation released");
                }
            }

            Action::Refuel => {
                let bs = next.barge_mut_at(idx);
                bs.current_fuel = (bs.current_fuel + params.fuel_flow_rate_per_minute)
                    .min(barge.fuel_capacity);
                if bs.current_fuel >= barge.fuel_capacity {
                    bs.action_queue.pop_front();
                }
            }

            Action::Fuel(vessel_id) => {
                // Applied targets always resolve; a stale id just idles.
                let Some(vidx) = instance.vessel_idx(vessel_id) else {
                    continue;
                };
                let vessel = &instance.vessels()[vidx];

                let demand = next.vessel_at(vidx).current_fuel_demand;
                let aboard = next.barge_at(idx).current_fuel;
                let transferred = params.fuel_flow_rate_per_minute.min(demand).min(aboard);
                let demand = demand - transferred;
                let aboard = aboard - transferred;

                if transferred > 0.0 {
                    next.vessel_mut_at(vidx).current_fuel_demand = demand;
                }

                // Leave enough minutes to unmoor before departure.
                let must_leave = vessel.departure_time.0
                    <= now.0.saturating_add(params.vessel_setup_time).saturating_add(1);

                let bs = next.barge_mut_at(idx);
                bs.current_fuel = aboard;
                if demand <= 0.0 || aboard <= 0.0 || must_leave {
                    bs.action_queue.pop_front();
                }
            }
        }
    }

    next.time = now.next();
    trace!(time = %next.time, "minute advanced");
    next
}

fn step_goto(bs: &mut BargeState, barge: &Barge, target: f64, tide: f64) {
    let remaining = target - bs.location;
    let direction = if remaining > 0.0 { 1.0 } else { -1.0 };
    let speed = knots_to_m_per_min(bs.speed_knots(barge, direction, tide));

    bs.location += direction * remaining.abs().min(speed.abs());

    if (bs.location - target).abs() < ARRIVAL_EPSILON_M {
        bs.location = target;
        bs.action_queue.pop_front();
    }
}

/// Advance one setup counter; pops the action and returns `true` when done.
fn step_setup(bs: &mut BargeState, setup_time: u64, phase: SetupPhase) -> bool {
    let progress = match phase {
        SetupPhase::Init => &mut bs.setup_init_progress,
        SetupPhase::End  => &mut bs.setup_end_progress,
    };
    let count = progress.map_or(1, |p| p + 1);

    if count >= setup_time.max(1) {
        *progress = None;
        bs.action_queue.pop_front();
        true
    } else {
        *progress = Some(count);
        false
    }
}

impl SimulationState {
    /// See [`advance`].
    #[inline]
    pub fn advance(&self) -> SimulationState {
        advance(self)
    }
}
