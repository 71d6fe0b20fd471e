//! The validated, immutable problem instance.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use bk_core::{BargeId, Minute, Target, VesselId};

use crate::record::InstanceRecord;
use crate::{Barge, ModelError, ModelResult, PortParams, Vessel};

/// Vessels, barges, and port constants for one simulation.
///
/// Built through [`Instance::new`] (or by deserialising an
/// [`InstanceRecord`], which runs the same checks).  Vessel and barge order
/// is preserved: it fixes candidate order and therefore greedy tie-breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InstanceRecord", into = "InstanceRecord")]
pub struct Instance {
    vessels:      Vec<Vessel>,
    barges:       Vec<Barge>,
    params:       PortParams,
    vessel_index: FxHashMap<VesselId, usize>,
    barge_index:  FxHashMap<BargeId, usize>,
}

impl Instance {
    /// Validate and assemble an instance.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInstance`] if any vessel has
    /// `arrival_time >= departure_time`, `point == 0`, or a negative demand;
    /// if any barge has a non-positive capacity or a reload threshold outside
    /// `[0, capacity]`; if ids repeat; or if a port constant is out of range
    /// (setup times are capped at [`PortParams::MAX_SETUP_TIME`]).
    pub fn new(vessels: Vec<Vessel>, barges: Vec<Barge>, params: PortParams) -> ModelResult<Self> {
        validate_params(&params)?;

        let mut vessel_index = FxHashMap::default();
        for (i, v) in vessels.iter().enumerate() {
            if v.arrival_time >= v.departure_time {
                return Err(invalid(format!(
                    "vessel {} arrives at {} but departs at {}",
                    v.id, v.arrival_time, v.departure_time
                )));
            }
            if v.point == 0 {
                return Err(invalid(format!("vessel {} is docked at point 0 (the origin)", v.id)));
            }
            if !v.fuel_demand.is_finite() || v.fuel_demand < 0.0 {
                return Err(invalid(format!("vessel {} has fuel demand {}", v.id, v.fuel_demand)));
            }
            if vessel_index.insert(v.id, i).is_some() {
                return Err(invalid(format!("duplicate vessel id {}", v.id)));
            }
        }

        let mut barge_index = FxHashMap::default();
        for (i, b) in barges.iter().enumerate() {
            if !b.fuel_capacity.is_finite() || b.fuel_capacity <= 0.0 {
                return Err(invalid(format!("barge {} has fuel capacity {}", b.id, b.fuel_capacity)));
            }
            if !(0.0..=b.fuel_capacity).contains(&b.min_fuel) {
                return Err(invalid(format!(
                    "barge {} reload threshold {} outside [0, {}]",
                    b.id, b.min_fuel, b.fuel_capacity
                )));
            }
            if !b.base_move_speed_knots.is_finite() || !b.move_speed_per_ton.is_finite() {
                return Err(invalid(format!("barge {} has a non-finite speed model", b.id)));
            }
            if barge_index.insert(b.id, i).is_some() {
                return Err(invalid(format!("duplicate barge id {}", b.id)));
            }
        }

        Ok(Self { vessels, barges, params, vessel_index, barge_index })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    #[inline]
    pub fn barges(&self) -> &[Barge] {
        &self.barges
    }

    #[inline]
    pub fn params(&self) -> &PortParams {
        &self.params
    }

    /// Position of vessel `id` in [`vessels`][Self::vessels].
    #[inline]
    pub fn vessel_idx(&self, id: VesselId) -> Option<usize> {
        self.vessel_index.get(&id).copied()
    }

    /// Position of barge `id` in [`barges`][Self::barges].
    #[inline]
    pub fn barge_idx(&self, id: BargeId) -> Option<usize> {
        self.barge_index.get(&id).copied()
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessel_idx(id).map(|i| &self.vessels[i])
    }

    pub fn barge(&self, id: BargeId) -> Option<&Barge> {
        self.barge_idx(id).map(|i| &self.barges[i])
    }

    // ── Derived quantities ────────────────────────────────────────────────

    /// Signed tide current at minute `t`, knots.
    #[inline]
    pub fn tide_speed(&self, t: Minute) -> f64 {
        self.params.tide_speed(t)
    }

    /// Quay position of vessel `id`, metres.
    pub fn vessel_position(&self, id: VesselId) -> Option<f64> {
        self.vessel(id).map(Vessel::position)
    }

    /// Quay position of `target`, metres (the origin is at 0).
    pub fn target_position(&self, target: Target) -> Option<f64> {
        match target {
            Target::Origin     => Some(0.0),
            Target::Vessel(id) => self.vessel_position(id),
        }
    }

    /// Last departure across all vessels — the simulation horizon.
    /// `None` when there are no vessels.
    pub fn max_departure(&self) -> Option<Minute> {
        self.vessels.iter().map(|v| v.departure_time).max()
    }

    /// Farthest point a barge can be sent to, metres.
    pub fn max_distance(&self) -> f64 {
        self.vessels.iter().map(Vessel::position).fold(0.0, f64::max)
    }

    /// Sum of initial fuel demand, tons.
    pub fn total_demand(&self) -> f64 {
        self.vessels.iter().map(|v| v.fuel_demand).sum()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn invalid(msg: String) -> ModelError {
    ModelError::InvalidInstance(msg)
}

fn validate_params(p: &PortParams) -> ModelResult<()> {
    if !p.tide_amplitude.is_finite() {
        return Err(invalid(format!("tide amplitude {}", p.tide_amplitude)));
    }
    if !p.tide_period.is_finite() || p.tide_period <= 0.0 {
        return Err(invalid(format!("tide period {} must be positive", p.tide_period)));
    }
    if !p.fuel_flow_rate_per_minute.is_finite() || p.fuel_flow_rate_per_minute <= 0.0 {
        return Err(invalid(format!(
            "fuel flow rate {} must be positive",
            p.fuel_flow_rate_per_minute
        )));
    }
    for (what, minutes) in [("origin", p.origin_setup_time), ("vessel", p.vessel_setup_time)] {
        if minutes > PortParams::MAX_SETUP_TIME {
            return Err(invalid(format!(
                "{what} setup time {minutes} exceeds {}",
                PortParams::MAX_SETUP_TIME
            )));
        }
    }
    if !(0.0..=1.0).contains(&p.min_fuel_fraction) {
        return Err(invalid(format!("min fuel fraction {} outside [0, 1]", p.min_fuel_fraction)));
    }
    Ok(())
}
