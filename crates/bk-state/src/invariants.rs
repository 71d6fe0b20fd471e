//! Checks for the properties every recorded state must satisfy.

use rustc_hash::FxHashMap;
use thiserror::Error;

use bk_core::{ARRIVAL_EPSILON_M, BargeId, Target, VesselId};

use crate::SimulationState;

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("vessel {vessel} demand {value} outside [0, {max}]")]
    DemandOutOfBounds { vessel: VesselId, value: f64, max: f64 },

    #[error("barge {barge} fuel {value} outside [0, {max}]")]
    FuelOutOfBounds { barge: BargeId, value: f64, max: f64 },

    #[error("barge {barge} location {value} outside [0, {max}]")]
    LocationOutOfBounds { barge: BargeId, value: f64, max: f64 },

    #[error("target {target} reserved by both barge {first} and barge {second}")]
    SharedReservation { target: Target, first: BargeId, second: BargeId },

    #[error("barge {barge} has queued actions but no reservation")]
    QueueWithoutReservation { barge: BargeId },
}

/// Every invariant `state` violates; empty when the state is consistent.
pub fn check_invariants(state: &SimulationState) -> Vec<InvariantViolation> {
    let instance = state.instance();
    let max_distance = instance.max_distance();
    let mut out = Vec::new();

    for (v, vs) in instance.vessels().iter().zip(state.vessel_states()) {
        if !(0.0..=v.fuel_demand).contains(&vs.current_fuel_demand) {
            out.push(InvariantViolation::DemandOutOfBounds {
                vessel: v.id,
                value:  vs.current_fuel_demand,
                max:    v.fuel_demand,
            });
        }
    }

    let mut holders: FxHashMap<Target, BargeId> = FxHashMap::default();
    for (b, bs) in instance.barges().iter().zip(state.barge_states()) {
        if !(0.0..=b.fuel_capacity).contains(&bs.current_fuel) {
            out.push(InvariantViolation::FuelOutOfBounds {
                barge: b.id,
                value: bs.current_fuel,
                max:   b.fuel_capacity,
            });
        }
        if bs.location < -ARRIVAL_EPSILON_M || bs.location > max_distance + ARRIVAL_EPSILON_M {
            out.push(InvariantViolation::LocationOutOfBounds {
                barge: b.id,
                value: bs.location,
                max:   max_distance,
            });
        }
        match bs.current_vessel_id {
            Some(target) => {
                if let Some(first) = holders.insert(target, b.id) {
                    out.push(InvariantViolation::SharedReservation { target, first, second: b.id });
                }
            }
            None if !bs.action_queue.is_empty() => {
                out.push(InvariantViolation::QueueWithoutReservation { barge: b.id });
            }
            None => {}
        }
    }

    out
}

impl SimulationState {
    /// See [`check_invariants`].
    #[inline]
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        check_invariants(self)
    }
}
