//! The per-minute output record consumed by visualisation and analysis.
//!
//! Field names and units (metres, tons, knots, minutes) are part of the
//! external format and must not change.

use serde::{Deserialize, Serialize};

use bk_core::{BargeId, Minute, Target, VesselId};

use crate::SimulationState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BargeSnapshot {
    pub id:                  BargeId,
    pub location:            f64,
    pub current_fuel:        f64,
    pub fuel_capacity:       f64,
    pub current_vessel_id:   Option<Target>,
    pub setup_init_progress: Option<u64>,
    pub setup_end_progress:  Option<u64>,
    /// Action tags, head first (`GO:370`, `SETUP_INIT:4`, …).
    pub action_queue:        Vec<String>,
    /// Forward speed over ground at this minute, knots.
    pub speed:               f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSnapshot {
    pub id:                  VesselId,
    pub position:            f64,
    pub current_fuel_demand: f64,
    pub fuel_demand:         f64,
    pub arrival_time:        Minute,
    pub departure_time:      Minute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub time:       Minute,
    pub tide_speed: f64,
    pub barges:     Vec<BargeSnapshot>,
    pub vessels:    Vec<VesselSnapshot>,
}

impl From<&SimulationState> for StateSnapshot {
    fn from(state: &SimulationState) -> Self {
        let instance = state.instance();
        let tide = state.tide_speed();

        let barges = instance
            .barges()
            .iter()
            .zip(state.barge_states())
            .map(|(b, bs)| BargeSnapshot {
                id:                  b.id,
                location:            bs.location,
                current_fuel:        bs.current_fuel,
                fuel_capacity:       b.fuel_capacity,
                current_vessel_id:   bs.current_vessel_id,
                setup_init_progress: bs.setup_init_progress,
                setup_end_progress:  bs.setup_end_progress,
                action_queue:        bs.action_queue.iter().map(ToString::to_string).collect(),
                speed:               bs.speed_knots(b, 1.0, tide),
            })
            .collect();

        let vessels = instance
            .vessels()
            .iter()
            .zip(state.vessel_states())
            .map(|(v, vs)| VesselSnapshot {
                id:                  v.id,
                position:            v.position(),
                current_fuel_demand: vs.current_fuel_demand,
                fuel_demand:         v.fuel_demand,
                arrival_time:        v.arrival_time,
                departure_time:      v.departure_time,
            })
            .collect();

        Self { time: state.time(), tide_speed: tide, barges, vessels }
    }
}

impl SimulationState {
    /// The output record for this minute.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(self)
    }
}
