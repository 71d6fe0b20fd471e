//! Most-urgent-vessel-first greedy choice.

use std::cmp::Ordering;

use bk_core::Target;
use bk_state::{Candidate, SimulationState, StateError};

use crate::{DecisionPolicy, PolicyError, PolicyResult};

/// Score of a (barge, vessel) pairing; higher is better, compared
/// field by field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GreedyScore {
    /// Outstanding demand per minute left before departure (at least 1).
    pub fuel_ratio: f64,
    /// 1 if the barge can meet the whole demand, else 0.
    pub can_fully_supply: u8,
    /// Fuel aboard when the barge cannot meet the demand, else 0.
    pub fallback_fuel: f64,
    /// Negated distance between barge and vessel, metres.
    pub neg_distance: f64,
}

impl GreedyScore {
    /// Score `candidate` against `state`.
    ///
    /// Origin candidates are never scored and yield
    /// [`PolicyError::OriginNotScored`].
    pub fn of(candidate: Candidate, state: &SimulationState) -> PolicyResult<Self> {
        let Target::Vessel(vessel_id) = candidate.target else {
            return Err(PolicyError::OriginNotScored(candidate.barge));
        };
        let instance = state.instance();
        let vessel = instance
            .vessel(vessel_id)
            .ok_or(StateError::UnknownTarget(candidate.target))?;
        let vs = state
            .vessel(vessel_id)
            .ok_or(StateError::UnknownTarget(candidate.target))?;
        let bs = state
            .barge(candidate.barge)
            .ok_or(StateError::UnknownBarge(candidate.barge))?;

        let remaining = vessel.remaining_time(state.time()).max(1) as f64;
        let can_fully_supply = bs.current_fuel >= vs.current_fuel_demand;

        Ok(Self {
            fuel_ratio:       vs.current_fuel_demand / remaining,
            can_fully_supply: u8::from(can_fully_supply),
            fallback_fuel:    if can_fully_supply { 0.0 } else { bs.current_fuel },
            neg_distance:     -(bs.location - vessel.position()).abs(),
        })
    }

    #[inline]
    fn key(&self) -> (f64, u8, f64, f64) {
        (self.fuel_ratio, self.can_fully_supply, self.fallback_fuel, self.neg_distance)
    }
}

impl PartialOrd for GreedyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key().partial_cmp(&other.key())
    }
}

/// Greedy assignment.
///
/// An origin candidate is returned as soon as it is seen, unscored: a barge
/// that must reload never competes.  Otherwise every candidate is scored
/// with [`GreedyScore`] and the strictly greatest wins; on equal scores the
/// earliest candidate in input order is kept.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyPolicy;

impl DecisionPolicy for GreedyPolicy {
    fn choose(&mut self, candidates: &[Candidate], state: &SimulationState) -> PolicyResult<Candidate> {
        let mut best: Option<(GreedyScore, Candidate)> = None;

        for &candidate in candidates {
            if candidate.target.is_origin() {
                return Ok(candidate);
            }
            let score = GreedyScore::of(candidate, state)?;
            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, candidate));
            }
        }

        best.map(|(_, c)| c).ok_or(PolicyError::NoCandidates)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
