//! Legal (barge, target) pairs for the current minute.

use rustc_hash::FxHashSet;

use bk_core::{BargeId, Target};

use crate::SimulationState;

/// A legal assignment a decision policy may pick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub barge:  BargeId,
    pub target: Target,
}

impl Candidate {
    #[inline]
    pub fn new(barge: BargeId, target: Target) -> Self {
        Self { barge, target }
    }
}

/// Every legal assignment at `state.time()`, in barge order then vessel
/// order.
///
/// A barge is considered only if it holds no reservation and its queue is
/// empty.  A barge below its reload threshold may only go to the origin, and
/// at most one origin candidate is produced per call (none while another
/// barge holds the origin).  Otherwise the barge is paired with every vessel
/// that is unreserved, still wants fuel, is in port, and departs no sooner
/// than two vessel setup times from now.
pub fn candidates(state: &SimulationState) -> Vec<Candidate> {
    let instance = state.instance();
    let now = state.time();
    let min_stay = i64::try_from(instance.params().vessel_setup_time)
        .map_or(i64::MAX, |s| s.saturating_mul(2));

    let mut reserved: FxHashSet<Target> = state
        .barge_states()
        .filter_map(|b| b.current_vessel_id)
        .collect();

    let mut out = Vec::new();

    for (barge, bs) in instance.barges().iter().zip(state.barge_states()) {
        if bs.current_vessel_id.is_some() || !bs.action_queue.is_empty() {
            continue;
        }

        if bs.current_fuel < barge.min_fuel {
            // Claim the origin for this pass so a second low barge does not
            // produce a competing origin candidate.
            if reserved.insert(Target::Origin) {
                out.push(Candidate::new(barge.id, Target::Origin));
            }
            continue;
        }

        for (vessel, vs) in instance.vessels().iter().zip(state.vessel_states()) {
            if reserved.contains(&Target::Vessel(vessel.id))
                || vs.current_fuel_demand <= 0.0
                || !vessel.in_port(now)
                || vessel.remaining_time(now) < min_stay
            {
                continue;
            }
            out.push(Candidate::new(barge.id, Target::Vessel(vessel.id)));
        }
    }

    out
}

impl SimulationState {
    /// See [`candidates`].
    #[inline]
    pub fn candidates(&self) -> Vec<Candidate> {
        candidates(self)
    }
}
